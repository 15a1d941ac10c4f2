use crate::infra::{
    parse_answer, parse_date, InMemoryAnalysisRepository, InMemoryConsultationPublisher,
};
use chrono::NaiveDate;
use clap::Args;
use std::sync::Arc;
use stylist_ai::error::AppError;
use stylist_ai::workflows::chromatic::{
    guide_for, AnalysisSubmission, AnswerMap, ChromaticAnalysisService, Season,
};

#[derive(Args, Debug)]
pub(crate) struct PaletteGuideArgs {
    /// Season label (winter, spring, summer, autumn)
    #[arg(long)]
    pub(crate) season: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Questionnaire answers as question=value pairs; defaults to a cool, high-contrast profile
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// Optional booking or client reference attached to the stored analysis
    #[arg(long)]
    pub(crate) client_reference: Option<String>,
    /// Override the submission date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) submitted_on: Option<NaiveDate>,
}

pub(crate) fn run_palette_guide(args: PaletteGuideArgs) -> Result<(), AppError> {
    let season = Season::from_label(&args.season);
    let guide = guide_for(season);

    if season == Season::Unknown {
        println!(
            "No reference palette for '{}'; showing the generic fallback",
            args.season
        );
    }
    println!("{}: {}", guide.season.label(), guide.headline);
    println!("{}", guide.description);

    if !guide.recommended.is_empty() {
        println!("\nRecommended palette");
        for swatch in &guide.recommended {
            println!("- {} {} ({})", swatch.hex, swatch.name, swatch.rationale);
        }
    }

    if !guide.cautions.is_empty() {
        println!("\nApproach with caution");
        for swatch in &guide.cautions {
            println!("- {} {} ({})", swatch.hex, swatch.name, swatch.rationale);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        answers,
        client_reference,
        submitted_on,
    } = args;

    println!("Chromatic analysis demo");

    let answers: AnswerMap = if answers.is_empty() {
        println!("No answers provided; using the sample cool, high-contrast profile");
        sample_answers()
    } else {
        answers.into_iter().collect()
    };

    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let consultations = Arc::new(InMemoryConsultationPublisher::default());
    let service = Arc::new(ChromaticAnalysisService::new(
        repository,
        consultations.clone(),
    ));

    let record = match service.analyze(AnalysisSubmission {
        answers,
        client_reference,
        submitted_on,
    }) {
        Ok(record) => record,
        Err(err) => {
            println!("  Analysis unavailable: {}", err);
            return Ok(());
        }
    };

    println!(
        "- Recorded analysis {} on {}",
        record.analysis_id.0, record.submitted_on
    );
    println!("  Verdict: {}", record.assessment.summary());
    println!(
        "  Score vector: winter {:.1} | spring {:.1} | summer {:.1} | autumn {:.1}",
        record.assessment.scores.winter,
        record.assessment.scores.spring,
        record.assessment.scores.summer,
        record.assessment.scores.autumn
    );

    println!("  Score components:");
    if record.assessment.components.is_empty() {
        println!("    - none (no recognized answers)");
    }
    for component in &record.assessment.components {
        println!(
            "    - {:?} -> {} +{:.1} ({})",
            component.topic,
            component.season.label(),
            component.points,
            component.notes
        );
    }

    let guide = guide_for(record.assessment.season);
    if !guide.recommended.is_empty() {
        println!("  Palette highlights ({}):", guide.headline);
        for swatch in guide.recommended.iter().take(3) {
            println!("    - {} {}", swatch.hex, swatch.name);
        }
    }

    match serde_json::to_string_pretty(&record.public_view()) {
        Ok(json) => println!("  Public status payload:\n{}", json),
        Err(err) => println!("  Public status payload unavailable: {}", err),
    }

    let requests = consultations.requests();
    if requests.is_empty() {
        println!("  Consultation requests: none dispatched");
    } else {
        println!("  Consultation requests:");
        for request in requests {
            println!(
                "    - template={} -> {}",
                request.template, request.analysis_id.0
            );
        }
    }

    Ok(())
}

fn sample_answers() -> AnswerMap {
    [
        ("vein_color", "blue"),
        ("sun_reaction", "burns"),
        ("jewelry", "silver"),
        ("favorable_colors", "cool_intense"),
        ("makeup_base", "pink"),
    ]
    .iter()
    .map(|(question, value)| (question.to_string(), value.to_string()))
    .collect()
}
