use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use photojury_core::{Competition, ResetProgress};

pub fn run(competition: &mut Competition, yes: bool) -> Result<()> {
    let counts = competition.counts()?;

    if !yes {
        println!(
            "This would delete {} categories, {} photos, {} scores, and every stored image file.",
            counts.categories, counts.photos, counts.scores
        );
        println!("Re-run with --yes to proceed.");
        std::process::exit(1);
    }

    let mut bar: Option<ProgressBar> = None;
    let outcome = competition.reset(Some(&mut |progress| match progress {
        ResetProgress::Start { total } => {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(bar_style());
            pb.set_prefix("Deleting");
            bar = Some(pb);
        }
        ResetProgress::FileRemoved { path } | ResetProgress::FileSkipped { path } => {
            if let Some(ref pb) = bar {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                pb.set_message(name);
                pb.inc(1);
            }
        }
        ResetProgress::Complete { removed, skipped } => {
            if let Some(pb) = bar.take() {
                pb.finish_with_message(format!("{removed} files removed, {skipped} skipped"));
            }
        }
    }))?;

    println!(
        "Deleted {} scores, {} photos, {} categories.",
        outcome.scores, outcome.photos, outcome.categories
    );
    println!("All competition data deleted.");

    Ok(())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "  {bar:30.cyan/blue} {spinner:.green} {pos:>5}/{len:<5} {prefix:.dim} {msg}",
    )
    .unwrap()
    .progress_chars("━╸─")
}
