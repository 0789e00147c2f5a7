use enigmata::{Puzzle, SolveResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_run(puzzle: &Puzzle, res: &SolveResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;

    let title = match &puzzle.id {
        Some(id) => format!("⚙  Solving {} [{}]: \"{}\"", puzzle.category, id, puzzle.question),
        None => format!("⚙  Solving {}: \"{}\"", puzzle.category, puzzle.question),
    };
    println!("\n{}", palette.bold(palette.paint(title, ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Solver ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("solver:"), palette.paint(details.solver.name(), ansi::BLUE));
    match &details.extracted {
        Some(extracted) => println!("  {} {}", palette.dim("input: "), palette.paint(extracted, ansi::YELLOW)),
        None => println!("  {} {}", palette.dim("input: "), palette.dim("(nothing extracted)")),
    }
    if let Some(rule) = details.rule {
        println!("  {} {}", palette.dim("rule:  "), palette.paint(rule, ansi::CYAN));
    }

    println!("\n{}", palette.paint("━━━ Answer ━━━", ansi::GRAY));
    if details.fallback {
        println!("  {} {}", palette.bold(&res.answer), palette.paint("(fallback)", ansi::YELLOW));
        if let Some(reason) = &details.reason {
            println!("  {} {}", palette.dim("reason:"), reason);
        }
    } else {
        println!("  {}", palette.bold(palette.paint(&res.answer, ansi::GREEN)));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    println!();
}
