mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tradeoff::renderers::tui::{InteractiveRenderer, TuiRenderer};
use tradeoff::{
    load_dataset, CliRenderer, DatasetStore, OutputRenderer, ReportWriter, Result, Selection,
    TextReportRenderer,
};

fn main() {
    let cli = Cli::parse();

    let store = match build_store(cli.data.as_deref()) {
        Ok(store) => store,
        Err(err) => fail(err),
    };

    let result = match cli.command {
        None => browse(store, None, PathBuf::from(".")),
        Some(Commands::Browse { topic, output_dir }) => browse(store, topic, output_dir),
        Some(Commands::Show { topic, no_metrics }) => show(&store, &topic, no_metrics),
        Some(Commands::Topics { json }) => topics(&store, json),
        Some(Commands::Report {
            topic,
            all,
            output_dir,
            stdout,
        }) => report(&store, topic, all, &output_dir, stdout),
    };

    if let Err(err) = result {
        fail(err);
    }
}

fn fail(err: tradeoff::TradeoffError) -> ! {
    eprintln!("{} {}", "Error:".bold().red(), err);
    process::exit(1);
}

fn build_store(data: Option<&Path>) -> Result<DatasetStore> {
    match data {
        Some(path) => load_dataset(path),
        None => Ok(DatasetStore::builtin()),
    }
}

fn initial_selection(store: &DatasetStore, topic: Option<String>) -> Result<Selection> {
    match topic {
        Some(key) => Selection::at(store, &key),
        None => Selection::first(store).ok_or_else(|| {
            tradeoff::TradeoffError::invalid_dataset("Dataset has no topics")
        }),
    }
}

fn browse(store: DatasetStore, topic: Option<String>, output_dir: PathBuf) -> Result<()> {
    let selection = initial_selection(&store, topic)?;
    TuiRenderer::new()
        .with_output_dir(output_dir)
        .run_interactive(store, selection)
}

fn show(store: &DatasetStore, topic: &str, no_metrics: bool) -> Result<()> {
    let selection = Selection::at(store, topic)?;
    let topic = store
        .get(selection.active())
        .ok_or_else(|| tradeoff::TradeoffError::general("Selected topic disappeared"))?;

    let renderer = if no_metrics {
        CliRenderer::without_metrics()
    } else {
        CliRenderer::new()
    };
    print!("{}", renderer.render(topic));
    Ok(())
}

fn topics(store: &DatasetStore, json: bool) -> Result<()> {
    if json {
        let listing: Vec<serde_json::Value> = store
            .topics()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "key": t.key,
                    "title": t.title,
                    "options": t.options.iter().map(|o| o.name.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();
        let output = serde_json::to_string_pretty(&listing)
            .map_err(|e| tradeoff::TradeoffError::general(format!("JSON encoding failed: {}", e)))?;
        println!("{}", output);
    } else {
        for topic in store.topics() {
            println!("{}  {}", topic.key.bold(), topic.title);
        }
    }
    Ok(())
}

fn report(
    store: &DatasetStore,
    topic: Option<String>,
    all: bool,
    output_dir: &Path,
    stdout: bool,
) -> Result<()> {
    let keys: Vec<String> = if all {
        store.keys().iter().map(|k| k.to_string()).collect()
    } else {
        vec![initial_selection(store, topic)?.active().to_string()]
    };

    let renderer = TextReportRenderer::new();
    let writer = ReportWriter::new(output_dir);

    for key in keys {
        let topic = store
            .get(&key)
            .ok_or_else(|| tradeoff::TradeoffError::general("Selected topic disappeared"))?;
        let text = renderer.render(topic);

        if stdout {
            print!("{}", text);
        } else {
            let path = writer.write_report(&key, &text)?;
            println!("{} {}", "Saved".green().bold(), path.display());
        }
    }

    Ok(())
}
