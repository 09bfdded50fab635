//! Ideation CLI - runs the idea pipeline from the terminal
//!
//! Usage:
//!   cargo run --bin ideation -- demo
//!   cargo run --bin ideation -- brainstorm --focus technology --count 5 --rank-by impact
//!   cargo run --bin ideation -- evaluate "A platform connecting local farms" --category social
//!   cargo run --bin ideation -- chat "I want to build a green energy app"
//!
//! Set IDEATION_SEED for reproducible output.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ideation_composer::report::recommendations;
use ideation_composer::{ChatEngine, ReportBuilder};
use ideation_engine::{
    evaluate, find_synergies, generate_roadmap, rank, registry::preview, EngineConfig,
    IdeaGenerator, IdeaRegistry, RankCriterion,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ideation")]
#[command(about = "Generate, score and plan ideas")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Brainstorm across three focus areas, rank, find synergies, plan the best idea
    Demo,

    /// Brainstorm ideas for one focus area and print them ranked
    Brainstorm {
        /// technology, business, social_impact or anything else for general
        #[arg(long, short, default_value = "general")]
        focus: String,

        #[arg(long, short, default_value_t = 5)]
        count: usize,

        /// overall, originality, impact, feasibility, market or low_risk
        #[arg(long, default_value = "overall")]
        rank_by: String,
    },

    /// Capture one idea and print its report and roadmap as JSON
    Evaluate {
        description: String,

        #[arg(long, default_value = "creative")]
        category: String,

        #[arg(long, default_value_t = 0.5)]
        feasibility: f64,

        /// Also write the report into this directory
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Answer one chat message and print the response as JSON
    Chat { text: String },
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is kept for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = EngineConfig::from_env();

    let mut registry = IdeaRegistry::new();
    let mut generator = IdeaGenerator::from_config(&config);

    match args.command {
        Command::Demo => run_demo(&config, &mut registry, &mut generator),
        Command::Brainstorm {
            focus,
            count,
            rank_by,
        } => {
            let ideas = generator.brainstorm(&mut registry, &focus, count)?;
            let ranked = rank(&ideas, RankCriterion::from_name(&rank_by));

            for (idx, evaluation) in ranked.iter().enumerate() {
                let description = registry
                    .get(&evaluation.idea_id)
                    .map(|idea| idea.description.as_str())
                    .unwrap_or_default();
                info!(
                    "{}. [{:.2}] {}",
                    idx + 1,
                    evaluation.overall_score,
                    description
                );
            }
            Ok(())
        }
        Command::Evaluate {
            description,
            category,
            feasibility,
            save,
        } => {
            let idea = registry.capture(description, category, feasibility);
            let reports = ReportBuilder::from_env();
            let report = reports.build(&idea, &evaluate(&idea));
            if let Some(dir) = save {
                reports.save(&report, &dir, None)?;
            }

            let output = serde_json::json!({
                "report": report,
                "roadmap": generate_roadmap(&registry, &idea.id)?,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Command::Chat { text } => {
            let response = ChatEngine::new()?.generate_response(&text);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

fn run_demo(
    config: &EngineConfig,
    registry: &mut IdeaRegistry,
    generator: &mut IdeaGenerator,
) -> Result<()> {
    info!("Ideation Engine demo v0.1.0");
    info!(
        "Creativity level {:.0}%, innovation threshold {:.0}%",
        config.creativity_level * 100.0,
        config.innovation_threshold * 100.0
    );

    info!("─────────────────────────────────────────────────");
    info!("1. Generating ideas across domains");
    let mut all_ideas = Vec::new();
    for (focus, count) in [("technology", 2), ("business", 2), ("social_impact", 2)] {
        all_ideas.extend(generator.brainstorm(registry, focus, count)?);
    }

    info!("2. Evaluating and ranking ideas");
    let ranked = rank(&all_ideas, RankCriterion::Overall);
    for (idx, evaluation) in ranked.iter().take(3).enumerate() {
        let description = registry
            .get(&evaluation.idea_id)
            .map(|idea| preview(&idea.description, 80))
            .unwrap_or_default();
        info!("  {}. {}", idx + 1, description);
        info!(
            "     Score: {:.1}% | Feasibility: {:.1}% | Impact: {:.1}% | Originality: {:.1}%",
            evaluation.overall_score * 100.0,
            evaluation.feasibility * 100.0,
            evaluation.impact_potential * 100.0,
            evaluation.originality * 100.0
        );
    }

    info!("3. Finding connections between ideas");
    let synergies = find_synergies(registry.iter());
    info!("  Found {} potential synergies", synergies.len());
    if let Some(top) = synergies.first() {
        info!("  Top synergy: {:.2}", top.synergy_score);
        info!("  Suggestion: {}", preview(&top.suggested_combination, 100));
        registry.connect(&top.idea1_id, &top.idea2_id, "complementary")?;
    }

    info!("4. Generating implementation roadmap");
    if let Some(top) = ranked.first() {
        let roadmap = generate_roadmap(registry, &top.idea_id)?;
        info!("  Selected idea: {}", preview(&roadmap.idea, 60));
        for (idx, phase) in roadmap.recommended_path.iter().enumerate() {
            info!("  {}. {} ({} months)", idx + 1, phase.phase, phase.duration);
        }
        for milestone in &roadmap.milestones {
            info!("  • {} - {}", milestone.name, milestone.timeline);
        }
        for challenge in &roadmap.challenges {
            info!("  ⚠ {}", challenge);
        }
        registry.advance(&top.idea_id, "developing")?;
    }

    info!("5. Recommendations for the top ideas");
    for evaluation in ranked.iter().take(2) {
        if let Some(idea) = registry.get(&evaluation.idea_id) {
            info!("  {}", preview(&idea.description, 50));
        }
        for recommendation in recommendations(evaluation) {
            info!("    • {}", recommendation);
        }
    }

    info!("6. Project stats");
    let snapshot = registry.snapshot(config);
    info!("  Total ideas generated: {}", snapshot.idea_count);
    info!(
        "  Average originality: {:.1}%",
        snapshot.stats.average_originality * 100.0
    );
    info!(
        "  Average impact potential: {:.1}%",
        snapshot.stats.average_impact * 100.0
    );
    let distribution: Vec<String> = snapshot
        .stats
        .category_distribution
        .iter()
        .map(|(category, count)| format!("{}:{}", category, count))
        .collect();
    info!("  Category distribution: {}", distribution.join(", "));

    let high_impact = registry.find_where(|idea| idea.impact_potential > 0.5);
    info!("  High-impact ideas (>0.5): {}", high_impact.len());

    info!("─────────────────────────────────────────────────");
    info!("Demo complete!");
    Ok(())
}
