//! The compiled-in comparison topics.
//!
//! Pure data; edits here are dataset authoring, not logic changes. The
//! store's tests run these topics through the dataset validator.

use crate::types::{
    ComparisonTopic, Metric, OptionProfile, Recommendation, Weight, WeightedPoint,
};

/// All built-in topics in display order
pub fn topics() -> Vec<ComparisonTopic> {
    vec![api_topic(), cloud_topic(), stack_topic()]
}

fn api_topic() -> ComparisonTopic {
    ComparisonTopic {
        key: "api".to_string(),
        title: "REST API vs GraphQL".to_string(),
        options: vec![
            OptionProfile {
                name: "REST API".to_string(),
                score: 7.5,
                pros: vec![
                    WeightedPoint::new("Simple and widely understood", Weight::High),
                    WeightedPoint::new("Better caching with HTTP", Weight::High),
                    WeightedPoint::new("Mature tooling ecosystem", Weight::Medium),
                    WeightedPoint::new("Easy to version and maintain", Weight::Medium),
                ],
                cons: vec![
                    WeightedPoint::new("Over-fetching or under-fetching data", Weight::High),
                    WeightedPoint::new("Multiple endpoints needed", Weight::Medium),
                    WeightedPoint::new("Can require multiple round trips", Weight::Medium),
                ],
                best_for: vec![
                    "Simple CRUD operations".to_string(),
                    "Public APIs".to_string(),
                    "Mobile apps with bandwidth constraints".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "Low"),
                    Metric::new("performance", "Good"),
                    Metric::new("scalability", "Excellent"),
                    Metric::new("learningCurve", "Easy"),
                ],
            },
            OptionProfile {
                name: "GraphQL".to_string(),
                score: 7.8,
                pros: vec![
                    WeightedPoint::new("Precise data fetching", Weight::High),
                    WeightedPoint::new("Single endpoint for all queries", Weight::High),
                    WeightedPoint::new("Strong typing and introspection", Weight::Medium),
                    WeightedPoint::new("Real-time subscriptions built-in", Weight::Medium),
                ],
                cons: vec![
                    WeightedPoint::new("Steeper learning curve", Weight::High),
                    WeightedPoint::new("Complex caching strategies", Weight::High),
                    WeightedPoint::new("Potential for expensive queries", Weight::Medium),
                    WeightedPoint::new("Overkill for simple use cases", Weight::Low),
                ],
                best_for: vec![
                    "Complex data requirements".to_string(),
                    "Rapid frontend iteration".to_string(),
                    "Multiple client types".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "High"),
                    Metric::new("performance", "Excellent"),
                    Metric::new("scalability", "Good"),
                    Metric::new("learningCurve", "Moderate"),
                ],
            },
        ],
        recommendation: Recommendation {
            context: "For a startup MVP with limited resources".to_string(),
            choice: "REST API".to_string(),
            reasoning: "Lower complexity and faster initial development. You can always \
                        migrate to GraphQL later when data requirements become more complex."
                .to_string(),
        },
    }
}

fn cloud_topic() -> ComparisonTopic {
    ComparisonTopic {
        key: "cloud".to_string(),
        title: "AWS vs Google Cloud vs Azure".to_string(),
        options: vec![
            OptionProfile {
                name: "AWS".to_string(),
                score: 8.5,
                pros: vec![
                    WeightedPoint::new("Largest market share and community", Weight::High),
                    WeightedPoint::new("Most comprehensive service catalog", Weight::High),
                    WeightedPoint::new("Best third-party integrations", Weight::Medium),
                    WeightedPoint::new("Mature documentation", Weight::Medium),
                ],
                cons: vec![
                    WeightedPoint::new("Can be expensive at scale", Weight::High),
                    WeightedPoint::new("Complex pricing structure", Weight::Medium),
                    WeightedPoint::new("Steeper learning curve", Weight::Medium),
                ],
                best_for: vec![
                    "Enterprise applications".to_string(),
                    "Startups needing comprehensive services".to_string(),
                    "Heavy compute workloads".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "High"),
                    Metric::new("cost", "$$$"),
                    Metric::new("performance", "Excellent"),
                    Metric::new("ecosystem", "Largest"),
                ],
            },
            OptionProfile {
                name: "Google Cloud".to_string(),
                score: 7.8,
                pros: vec![
                    WeightedPoint::new("Best for data analytics and ML", Weight::High),
                    WeightedPoint::new("Competitive pricing", Weight::High),
                    WeightedPoint::new("Excellent Kubernetes support", Weight::Medium),
                    WeightedPoint::new("Simple, clean interface", Weight::Low),
                ],
                cons: vec![
                    WeightedPoint::new("Smaller service catalog than AWS", Weight::Medium),
                    WeightedPoint::new("Less enterprise adoption", Weight::Medium),
                    WeightedPoint::new("Fewer third-party integrations", Weight::Low),
                ],
                best_for: vec![
                    "Data-heavy applications".to_string(),
                    "Machine learning projects".to_string(),
                    "Container-based workloads".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "Medium"),
                    Metric::new("cost", "$$"),
                    Metric::new("performance", "Excellent"),
                    Metric::new("ecosystem", "Growing"),
                ],
            },
            OptionProfile {
                name: "Azure".to_string(),
                score: 8.2,
                pros: vec![
                    WeightedPoint::new("Best Microsoft integration", Weight::High),
                    WeightedPoint::new("Strong hybrid cloud support", Weight::High),
                    WeightedPoint::new("Good enterprise features", Weight::Medium),
                    WeightedPoint::new("Competitive enterprise pricing", Weight::Medium),
                ],
                cons: vec![
                    WeightedPoint::new("Less intuitive interface", Weight::Medium),
                    WeightedPoint::new("Inconsistent documentation", Weight::Medium),
                    WeightedPoint::new("Smaller community vs AWS", Weight::Low),
                ],
                best_for: vec![
                    "Microsoft-heavy organizations".to_string(),
                    "Hybrid cloud deployments".to_string(),
                    "Enterprise .NET applications".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "Medium"),
                    Metric::new("cost", "$$"),
                    Metric::new("performance", "Excellent"),
                    Metric::new("ecosystem", "Enterprise"),
                ],
            },
        ],
        recommendation: Recommendation {
            context: "For a Python-based ML startup".to_string(),
            choice: "Google Cloud".to_string(),
            reasoning: "Superior ML tools (Vertex AI, BigQuery ML), competitive pricing, and \
                        excellent support for modern development practices."
                .to_string(),
        },
    }
}

fn stack_topic() -> ComparisonTopic {
    ComparisonTopic {
        key: "stack".to_string(),
        title: "Tech Stack Comparison".to_string(),
        options: vec![
            OptionProfile {
                name: "React + Node.js + PostgreSQL".to_string(),
                score: 8.3,
                pros: vec![
                    WeightedPoint::new("Full JavaScript stack", Weight::High),
                    WeightedPoint::new("Large talent pool", Weight::High),
                    WeightedPoint::new("Excellent for real-time apps", Weight::Medium),
                    WeightedPoint::new("Rich ecosystem of libraries", Weight::Medium),
                ],
                cons: vec![
                    WeightedPoint::new("JavaScript fatigue (too many choices)", Weight::Medium),
                    WeightedPoint::new("Not ideal for CPU-intensive tasks", Weight::Medium),
                    WeightedPoint::new("Callback complexity potential", Weight::Low),
                ],
                best_for: vec![
                    "Real-time applications".to_string(),
                    "Rapid prototyping".to_string(),
                    "Teams with JS expertise".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "Medium"),
                    Metric::new("performance", "Good"),
                    Metric::new("hiring", "Easy"),
                    Metric::new("maturity", "Very Mature"),
                ],
            },
            OptionProfile {
                name: "Next.js + Prisma + PostgreSQL".to_string(),
                score: 8.7,
                pros: vec![
                    WeightedPoint::new("Built-in SSR and SSG", Weight::High),
                    WeightedPoint::new("Excellent SEO capabilities", Weight::High),
                    WeightedPoint::new("Type-safe database access", Weight::Medium),
                    WeightedPoint::new("Great developer experience", Weight::Medium),
                ],
                cons: vec![
                    WeightedPoint::new("Vendor lock-in to Vercel patterns", Weight::Medium),
                    WeightedPoint::new("Learning curve for full-stack features", Weight::Medium),
                    WeightedPoint::new("Can be overkill for simple apps", Weight::Low),
                ],
                best_for: vec![
                    "SEO-critical apps".to_string(),
                    "E-commerce platforms".to_string(),
                    "Content-heavy sites".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "Medium"),
                    Metric::new("performance", "Excellent"),
                    Metric::new("hiring", "Moderate"),
                    Metric::new("maturity", "Mature"),
                ],
            },
            OptionProfile {
                name: "Django + PostgreSQL + React".to_string(),
                score: 8.0,
                pros: vec![
                    WeightedPoint::new("Batteries-included framework", Weight::High),
                    WeightedPoint::new("Excellent admin interface", Weight::High),
                    WeightedPoint::new("Strong security defaults", Weight::Medium),
                    WeightedPoint::new("Great for data-driven apps", Weight::Medium),
                ],
                cons: vec![
                    WeightedPoint::new("Monolithic architecture", Weight::Medium),
                    WeightedPoint::new("Less flexible than micro-frameworks", Weight::Medium),
                    WeightedPoint::new("Python can be slower than compiled languages", Weight::Low),
                ],
                best_for: vec![
                    "Content management systems".to_string(),
                    "Data science integration".to_string(),
                    "Rapid MVP development".to_string(),
                ],
                metrics: vec![
                    Metric::new("complexity", "Low"),
                    Metric::new("performance", "Good"),
                    Metric::new("hiring", "Moderate"),
                    Metric::new("maturity", "Very Mature"),
                ],
            },
        ],
        recommendation: Recommendation {
            context: "For a SaaS product with complex business logic".to_string(),
            choice: "Next.js + Prisma + PostgreSQL".to_string(),
            reasoning: "Combines modern developer experience with production-ready features. \
                        Type safety across the stack reduces bugs, and Next.js handles both \
                        marketing pages and app logic efficiently."
                .to_string(),
        },
    }
}
