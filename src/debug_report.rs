use omnialias::{Candidate, SuggestResultVerbose};

/// What a piece of report text is, mapped to an SGR code when color is on.
#[derive(Clone, Copy)]
enum Style {
    Heading,
    Rule,
    Url,
    Alias,
    Prefix,
    Distance,
    Muted,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Style::Heading => "1;36",
            Style::Rule => "90",
            Style::Url => "1;32",
            Style::Alias => "36",
            Style::Prefix => "33",
            Style::Distance => "34",
            Style::Muted => "2",
        }
    }
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, style: Style, text: impl AsRef<str>) -> String {
        if self.color { format!("\x1b[{}m{}\x1b[0m", style.sgr(), text.as_ref()) } else { text.as_ref().to_string() }
    }
}

pub fn print_run(res: &SuggestResultVerbose, color: bool) {
    let p = Painter { color };
    println!("\n{}", p.paint(Style::Heading, format!("Ranking \"{}\"", res.text)));

    println!("\n{}", p.paint(Style::Rule, "── suggestions ──"));
    if res.results.is_empty() {
        println!("{}", p.paint(Style::Muted, "  no aliases defined (use --aliases <file.json> or --alias <name>=<template>)"));
    } else {
        for (rank, candidate) in res.results.iter().enumerate() {
            print_candidate(rank, candidate, &p);
        }
    }

    let hidden = res.all_candidates.len().saturating_sub(res.results.len());
    if hidden > 0 {
        println!("  {}", p.paint(Style::Muted, format!("+{hidden} below the limit")));
    }

    println!(
        "\n  {} {}  {} {}\n",
        p.paint(Style::Muted, "ranked"),
        p.paint(Style::Distance, res.all_candidates.len().to_string()),
        p.paint(Style::Muted, "in"),
        p.paint(Style::Url, format!("{:?}", res.elapsed)),
    );
}

fn print_candidate(rank: usize, candidate: &Candidate, p: &Painter) {
    println!(
        "  {:>2}. {}  {} {}",
        rank + 1,
        p.paint(Style::Url, &candidate.url),
        p.paint(Style::Muted, "via"),
        p.paint(Style::Alias, &candidate.alias),
    );
    println!(
        "      {} {}  {} {}",
        p.paint(Style::Muted, "prefix"),
        p.paint(Style::Prefix, candidate.prefix.to_string()),
        p.paint(Style::Muted, "distance"),
        p.paint(Style::Distance, candidate.distance.to_string()),
    );
}
