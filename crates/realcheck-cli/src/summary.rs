use std::path::Path;

use console::Style;
use realcheck_core::interpret::{DisplayResult, Label};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    real: Style,
    fake: Style,
    uncertain: Style,
    path: Style,
    alert: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            real: Style::new().green().bold(),
            fake: Style::new().red().bold(),
            uncertain: Style::new().yellow().bold(),
            path: Style::new().underlined(),
            alert: Style::new().red().bold(),
        }
    }

    fn verdict(&self, label: Label) -> &Style {
        match label {
            Label::Real => &self.real,
            Label::AiGenerated => &self.fake,
            Label::Uncertain => &self.uncertain,
        }
    }
}

pub fn print_result(file: Option<&Path>, result: &DisplayResult) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image Authenticity"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    if let Some(banner) = result.banner() {
        println!("  {}", s.verdict(result.label).apply_to(banner));
        println!();
    }

    if let Some(file) = file {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.path.apply_to(file.display())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Verdict"),
        s.verdict(result.label).apply_to(result.label)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Confidence"),
        s.value.apply_to(format!("{}%", result.confidence_percent))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Benchmark"),
        s.value.apply_to(result.benchmark())
    );
    println!();

    println!("  {}", s.header.apply_to("Analysis Report"));
    for line in wrap(result.analysis_text, 72) {
        println!("    {line}");
    }
    println!();
}

pub fn print_alert(message: &str) {
    let s = Styles::new();
    eprintln!();
    eprintln!("  {}", s.alert.apply_to("Detection failed"));
    eprintln!("    {message}");
    eprintln!("    Check that the classification service is running and try again.");
    eprintln!();
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
