//! Fun commands: matrix, fortune, joke, zen, cowsay, hack, weather,
//! neofetch, and the easter eggs.

use rand::Rng;
use rand::seq::SliceRandom;

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Category, Command, CommandOutput, CommandRegistry, Context};
use crate::message::{Panel, Reply};

pub fn register_fun_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(MatrixCmd))?;
    reg.register(Box::new(FortuneCmd))?;
    reg.register(Box::new(JokeCmd))?;
    reg.register(Box::new(ZenCmd))?;
    reg.register(Box::new(CowsayCmd))?;
    reg.register(Box::new(HackCmd))?;
    reg.register(Box::new(WeatherCmd))?;
    reg.register(Box::new(NeofetchCmd))?;
    reg.register(Box::new(CoffeeCmd))?;
    for cmd in EGGS {
        reg.register(Box::new(cmd))?;
    }
    reg.register(Box::new(AsciiCmd))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// matrix
// ---------------------------------------------------------------------------

const MATRIX_GLYPHS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'Z',
];
const MATRIX_ROWS: usize = 12;
const MATRIX_COLS: usize = 40;

struct MatrixCmd;
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Matrix rain animation"
    }
    fn usage(&self) -> &str {
        "matrix"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let rng = ctx.rng();
        // Each column gets a falling trail: a head row and a length.
        let trails: Vec<(usize, usize)> = (0..MATRIX_COLS)
            .map(|_| (rng.gen_range(0..MATRIX_ROWS * 2), rng.gen_range(3..MATRIX_ROWS)))
            .collect();
        let rows = (0..MATRIX_ROWS)
            .map(|row| {
                trails
                    .iter()
                    .map(|&(head, len)| {
                        if row <= head && head - row < len {
                            MATRIX_GLYPHS.choose(&mut *rng).copied().unwrap_or(' ')
                        } else {
                            ' '
                        }
                    })
                    .collect::<String>()
            })
            .collect();
        Ok(Reply::panel(Panel::Matrix(rows)).into())
    }
}

// ---------------------------------------------------------------------------
// fortune / joke / zen
// ---------------------------------------------------------------------------

const DEV_QUOTES: &[&str] = &[
    "\"Any fool can write code that a computer can understand. Good programmers write code that humans can understand.\" - Martin Fowler",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"Programming isn't about what you know; it's about what you can figure out.\" - Chris Pine",
    "\"The best error message is the one that never shows up.\" - Thomas Fuchs",
    "\"Simplicity is the soul of efficiency.\" - Austin Freeman",
    "\"Make it work, make it right, make it fast.\" - Kent Beck",
    "\"Clean code always looks like it was written by someone who cares.\" - Robert C. Martin",
    "\"It's not a bug, it's an undocumented feature.\" - Anonymous",
    "\"Talk is cheap. Show me the code.\" - Linus Torvalds",
];

const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "A SQL query walks into a bar, walks up to two tables and asks... 'Can I join you?'",
    "Why do Java developers wear glasses? Because they can't C#! 👓",
    "There are only 10 types of people in the world: those who understand binary and those who don't.",
    "A programmer is told: 'Go to the store and buy a loaf of bread. If they have eggs, buy a dozen.' They come home with 12 loaves of bread.",
    "Why was the JavaScript developer sad? Because they didn't Node how to Express themselves! 😢",
    "What's a programmer's favorite hangout place? Foo Bar! 🍺",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem!",
    "Why do programmers always mix up Halloween and Christmas? Because Oct 31 == Dec 25! 🎃🎄",
    "['hip', 'hip'] // hooray!",
    "A programmer puts two glasses on the bedside table before going to sleep. A full one, in case they get thirsty, and an empty one, in case they don't.",
    "What's the object-oriented way to become wealthy? Inheritance! 💰",
];

const ZEN: &[&str] = &[
    "Beautiful is better than ugly.",
    "Explicit is better than implicit.",
    "Simple is better than complex.",
    "Complex is better than complicated.",
    "Flat is better than nested.",
    "Sparse is better than dense.",
    "Readability counts.",
    "Special cases aren't special enough to break the rules.",
    "Errors should never pass silently.",
    "In the face of ambiguity, refuse the temptation to guess.",
    "Now is better than never.",
    "If the implementation is hard to explain, it's a bad idea.",
];

struct FortuneCmd;
impl Command for FortuneCmd {
    fn name(&self) -> &str {
        "fortune"
    }
    fn description(&self) -> &str {
        "Get a random dev quote"
    }
    fn usage(&self) -> &str {
        "fortune"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::info(format!("🔮 {}", ctx.choose(DEV_QUOTES))).into())
    }
}

struct JokeCmd;
impl Command for JokeCmd {
    fn name(&self) -> &str {
        "joke"
    }
    fn description(&self) -> &str {
        "Programming jokes"
    }
    fn usage(&self) -> &str {
        "joke"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::info(format!("😂 {}", ctx.choose(JOKES))).into())
    }
}

struct ZenCmd;
impl Command for ZenCmd {
    fn name(&self) -> &str {
        "zen"
    }
    fn description(&self) -> &str {
        "Programming wisdom"
    }
    fn usage(&self) -> &str {
        "zen"
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::info(format!(
            "🧘 The Zen of Programming:\n\n\"{}\"",
            ctx.choose(ZEN)
        ))
        .into())
    }
}

// ---------------------------------------------------------------------------
// cowsay
// ---------------------------------------------------------------------------

struct CowsayCmd;
impl Command for CowsayCmd {
    fn name(&self) -> &str {
        "cowsay"
    }
    fn description(&self) -> &str {
        "Make a cow say something"
    }
    fn usage(&self) -> &str {
        "cowsay [text]"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let text = if args.is_empty() {
            "Moo!".to_string()
        } else {
            args.join(" ")
        };
        Ok(Reply::panel(Panel::Art(cowsay(&text))).into())
    }
}

fn cowsay(text: &str) -> String {
    let width = text.chars().count() + 2;
    format!(
        " {top}\n< {text} >\n {bottom}\n        \\   ^__^\n         \\  (oo)\\_______\n            (__)\\       )\\/\\\n                ||----w |\n                ||     ||",
        top = "_".repeat(width),
        bottom = "-".repeat(width),
    )
}

// ---------------------------------------------------------------------------
// hack
// ---------------------------------------------------------------------------

const HACK_STEPS: usize = 5;

const HACKER_PHRASES: &[&str] = &[
    "Initializing kernel bypass...",
    "Decrypting mainframe access codes...",
    "Bypassing firewall protocols...",
    "Injecting SQL into the Gibson...",
    "Accessing NSA backdoor...",
    "Downloading more RAM...",
    "Hacking the planet...",
    "Entering the Matrix...",
    "Triangulating IP address...",
    "Cracking SHA-256 encryption...",
    "Uploading virus.exe...",
    "Access granted! Just kidding 😄",
];

struct HackCmd;
impl Command for HackCmd {
    fn name(&self) -> &str {
        "hack"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["hacker"]
    }
    fn description(&self) -> &str {
        "Feel like a hacker"
    }
    fn usage(&self) -> &str {
        "hack"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let mut steps: Vec<Reply> = (1..=HACK_STEPS)
            .map(|i| Reply::warning(format!("[{}] {}", ">".repeat(i), ctx.choose(HACKER_PHRASES))))
            .collect();
        steps.push(Reply::success("✓ Just kidding! This is just a portfolio 😄"));
        Ok(CommandOutput::Sequence(steps))
    }
}

// ---------------------------------------------------------------------------
// weather
// ---------------------------------------------------------------------------

const WEATHER_ICONS: &[&str] = &["☀️", "⛅", "🌧️", "❄️", "🌈"];
const WEATHER_TEMPS_F: &[i32] = &[72, 68, 75, 65, 80, 55, 60];
const WEATHER_CONDITIONS: &[&str] = &[
    "Sunny",
    "Partly Cloudy",
    "Rainy",
    "Snowy",
    "Perfect Coding Weather",
];

fn fahrenheit_to_celsius(f: i32) -> i32 {
    (f64::from(f - 32) * 5.0 / 9.0).round() as i32
}

struct WeatherCmd;
impl Command for WeatherCmd {
    fn name(&self) -> &str {
        "weather"
    }
    fn description(&self) -> &str {
        "Check the weather"
    }
    fn usage(&self) -> &str {
        "weather"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let icon = ctx.choose(WEATHER_ICONS);
        let temp = ctx.choose(WEATHER_TEMPS_F);
        let condition = ctx.choose(WEATHER_CONDITIONS);
        Ok(Reply::info(format!(
            "{icon} Weather Report\n\
             ━━━━━━━━━━━━━━━━━━\n\
             Location: Your Computer\n\
             Temp: {temp}°F / {}°C\n\
             Condition: {condition}\n\
             Humidity: Perfect for coding\n\
             Forecast: 100% chance of productivity",
            fahrenheit_to_celsius(temp)
        ))
        .into())
    }
}

// ---------------------------------------------------------------------------
// neofetch / coffee
// ---------------------------------------------------------------------------

struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["sysinfo"]
    }
    fn description(&self) -> &str {
        "System info display"
    }
    fn usage(&self) -> &str {
        "neofetch"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let logo = [
            "       .       ",
            "      / \\      ",
            "     /   \\     ",
            "    /^.   \\    ",
            "   /  .-.  \\   ",
            "  /  (   ) _\\  ",
            " / _.~   ~._^\\ ",
            "/.^ \\     /.^.\\",
        ];
        let host = format!("Host: {}'s Terminal", ctx.content.profile.name);
        let theme = format!("Theme: {}", ctx.theme());
        let info = [
            "user@portfolio",
            "---------------",
            "OS: Portfolio OS v4.0",
            host.as_str(),
            "Kernel: Rust",
            "Uptime: Since you arrived",
            "Packages: cargo (many)",
            "Shell: portfolio-shell",
            "Terminal: crossterm",
            theme.as_str(),
            "CPU: Your Brain @ ∞ GHz",
            "Memory: Unlimited Creativity",
        ];
        let blank = " ".repeat(15);
        let art = info
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let left = logo.get(i).copied().unwrap_or(blank.as_str());
                format!("{left}   {line}")
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Reply::panel(Panel::Art(art)).into())
    }
}

struct CoffeeCmd;
impl Command for CoffeeCmd {
    fn name(&self) -> &str {
        "coffee"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["brew"]
    }
    fn description(&self) -> &str {
        "Get some virtual coffee"
    }
    fn usage(&self) -> &str {
        "coffee"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::panel(Panel::Art(
            "    ( (\n     ) )\n  ........\n  |      |]\n  \\      /\n   `----'\n\n☕ Here's your coffee!\nKeep coding! 💪"
                .to_string(),
        ))
        .into())
    }
}

// ---------------------------------------------------------------------------
// Easter eggs: fixed responses with no arguments.
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum EggBody {
    Info(&'static str),
    Success(&'static str),
    Art(&'static str),
}

struct EggCmd {
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    category: Category,
    body: EggBody,
}

impl Command for EggCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn category(&self) -> Category {
        self.category
    }
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let reply = match self.body {
            EggBody::Info(text) => Reply::info(text),
            EggBody::Success(text) => Reply::success(text),
            EggBody::Art(art) => Reply::panel(Panel::Art(art.to_string())),
        };
        Ok(reply.into())
    }
}

const fn egg(
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    body: EggBody,
) -> EggCmd {
    EggCmd {
        name,
        aliases,
        description,
        category: Category::Hidden,
        body,
    }
}

const EGGS: [EggCmd; 13] = [
    egg(
        "cat",
        &[],
        "Meow",
        EggBody::Art("  /\\_/\\\n ( o.o )\n  > ^ <\n /|   |\\\n(_|   |_)\n\nMeow! 🐱"),
    ),
    egg(
        "dog",
        &[],
        "Woof",
        EggBody::Art("    / \\__\n   (    @\\___\n   /         O\n  /   (_____/\n /_____/   U\n\nWoof! 🐕"),
    ),
    egg(
        "parrot",
        &["party"],
        "Party parrot",
        EggBody::Info(
            "🦜 Party Parrot says: Keep coding and stay awesome!\n\n\
             ░░░░░░░░░░░░░░░░░░░░░░░\n\
             ░░░░░░░░░░░░░▄▀▀▀▀▀▀░░░\n\
             ░░░░░░░░░░░░█░░░░░░░░░░\n\
             ░░░░░░░░░░░█░░▀█▀░▀░░░░\n\
             ░░░░░░░░░░░█░░░░░░░░░░░\n\
             ░░░░░░░░░░░░▀▄▄▄▄▄▄░░░░\n\
             ░░░░░░░░░░░░░░░░░░░░░░░",
        ),
    ),
    egg(
        "rickroll",
        &["rick"],
        "You know what this does",
        EggBody::Info(
            "🎵 Never gonna give you up,\nNever gonna let you down,\n\
             Never gonna run around and desert you!\n\n\
             You've been rickrolled! 🕺\nCheck out my projects instead: type 'projects'",
        ),
    ),
    egg(
        "love",
        &["heart"],
        "Spread the love",
        EggBody::Info(
            "    ❤️  ❤️\n  ❤️❤️❤️❤️❤️❤️\n ❤️❤️❤️❤️❤️❤️❤️\n❤️❤️❤️❤️❤️❤️❤️❤️\n ❤️❤️❤️❤️❤️❤️❤️\n  ❤️❤️❤️❤️❤️❤️\n   ❤️❤️❤️❤️❤️\n    ❤️❤️❤️\n     ❤️\n\nThanks for visiting! 💕",
        ),
    ),
    EggCmd {
        category: Category::Fun,
        ..egg(
            "secret",
            &["konami"],
            "???",
            EggBody::Success(
                "🎮 You found a secret!\n\n↑ ↑ ↓ ↓ ← → ← → B A\n\n\
                 Try these hidden commands:\n\
                 • neofetch  - System info\n\
                 • hack      - Hacker mode\n\
                 • rickroll  - You know what this does\n\
                 • zen       - Programming wisdom\n\
                 • party     - Party parrot!",
            ),
        )
    },
    egg(
        "credits",
        &[],
        "Who made this",
        EggBody::Info(
            "╔════════════════════════════════════╗\n\
             ║           CREDITS                  ║\n\
             ╠════════════════════════════════════╣\n\
             ║  Built with: Rust + crossterm      ║\n\
             ║  Content: portfolio.toml           ║\n\
             ║  Clipboard: arboard                ║\n\
             ║  Links: open                       ║\n\
             ╚════════════════════════════════════╝\n\n\
             Thanks for checking out my portfolio! 🙏",
        ),
    ),
    egg("b", &[], "🅱️", EggBody::Info("🅱️")),
    egg("flip", &["tableflip"], "Flip a table", EggBody::Info("(╯°□°)╯︵ ┻━┻")),
    egg("unflip", &[], "Put the table back", EggBody::Info("┬─┬ノ( º _ ºノ)")),
    egg("shrug", &[], "Shrug", EggBody::Info("¯\\_(ツ)_/¯")),
    egg("lenny", &[], "Lenny face", EggBody::Info("( ͡° ͜ʖ ͡°)")),
    egg(
        "snake",
        &["game"],
        "Play a game",
        EggBody::Info(
            "🎮 Games coming soon!\n\n\
             For now, try these fun commands:\n\
             • matrix    - The Matrix rain effect\n\
             • cowsay    - Make a cow say something\n\
             • fortune   - Get a dev quote\n\
             • joke      - Hear a programming joke\n\
             • hack      - Feel like a hacker\n\
             • coffee    - Get some virtual coffee",
        ),
    ),
];

// ---------------------------------------------------------------------------
// ascii
// ---------------------------------------------------------------------------

struct AsciiCmd;
impl Command for AsciiCmd {
    fn name(&self) -> &str {
        "ascii"
    }
    fn description(&self) -> &str {
        "Draw text in a box"
    }
    fn usage(&self) -> &str {
        "ascii [text]"
    }
    fn execute(&self, args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(FolioError::missing("Usage: ascii [text]\nExample: ascii hello"));
        }
        let text = args.join(" ").to_uppercase();
        let bar = "═".repeat(text.chars().count() + 4);
        Ok(Reply::info(format!("╔{bar}╗\n║  {text}  ║\n╚{bar}╝")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;
    use crate::test_utils::{TestEnv, run_line};

    #[test]
    fn fortune_joke_zen_draw_from_pools() {
        let mut env = TestEnv::new();
        let (kind, text) = run_line(&mut env, "fortune").only_text();
        assert_eq!(kind, MessageKind::Info);
        assert!(DEV_QUOTES.iter().any(|q| text == format!("🔮 {q}")));

        let (_, text) = run_line(&mut env, "joke").only_text();
        assert!(JOKES.iter().any(|j| text == format!("😂 {j}")));

        let (_, text) = run_line(&mut env, "zen").only_text();
        assert!(ZEN.iter().any(|z| text.contains(z)));
    }

    #[test]
    fn same_seed_same_fortune() {
        let a = run_line(&mut TestEnv::new(), "fortune").only_text();
        let b = run_line(&mut TestEnv::new(), "fortune").only_text();
        assert_eq!(a, b);
    }

    #[test]
    fn cowsay_default_and_custom() {
        let mut env = TestEnv::new();
        let run = run_line(&mut env, "cowsay");
        let Some(Panel::Art(art)) = run.output.replies()[0].payload.as_panel() else {
            panic!("expected art");
        };
        assert!(art.contains("< Moo! >"));
        assert!(art.contains(" ______\n"));

        let run = run_line(&mut env, "cowsay Hello Rust");
        let Some(Panel::Art(art)) = run.output.replies()[0].payload.as_panel() else {
            panic!("expected art");
        };
        assert!(art.contains("< Hello Rust >"));
    }

    #[test]
    fn hack_is_five_warnings_then_success() {
        let mut env = TestEnv::new();
        let run = run_line(&mut env, "hacker");
        let CommandOutput::Sequence(steps) = &run.output else {
            panic!("expected a sequence");
        };
        assert_eq!(steps.len(), HACK_STEPS + 1);
        for (i, step) in steps[..HACK_STEPS].iter().enumerate() {
            assert_eq!(step.kind, MessageKind::Warning);
            let prefix = format!("[{}] ", ">".repeat(i + 1));
            assert!(step.payload.as_text().unwrap().starts_with(&prefix));
        }
        assert_eq!(steps[HACK_STEPS].kind, MessageKind::Success);
    }

    #[test]
    fn matrix_grid_has_fixed_shape() {
        let mut env = TestEnv::new();
        let run = run_line(&mut env, "matrix");
        let Some(Panel::Matrix(rows)) = run.output.replies()[0].payload.as_panel() else {
            panic!("expected matrix");
        };
        assert_eq!(rows.len(), MATRIX_ROWS);
        assert!(rows.iter().all(|r| r.chars().count() == MATRIX_COLS));
        assert!(rows.iter().any(|r| !r.trim().is_empty()));
    }

    #[test]
    fn weather_reports_consistent_temps() {
        let mut env = TestEnv::new();
        let (_, text) = run_line(&mut env, "weather").only_text();
        let temp_line = text.lines().find(|l| l.starts_with("Temp: ")).unwrap();
        let f: i32 = temp_line[6..].split('°').next().unwrap().parse().unwrap();
        assert!(WEATHER_TEMPS_F.contains(&f));
        assert!(temp_line.ends_with(&format!("{}°C", fahrenheit_to_celsius(f))));
    }

    #[test]
    fn celsius_rounding() {
        assert_eq!(fahrenheit_to_celsius(72), 22);
        assert_eq!(fahrenheit_to_celsius(75), 24);
        assert_eq!(fahrenheit_to_celsius(55), 13);
    }

    #[test]
    fn neofetch_shows_theme() {
        let mut env = TestEnv::new();
        env.theme = folio_types::theme::Theme::Light;
        let run = run_line(&mut env, "sysinfo");
        let Some(Panel::Art(art)) = run.output.replies()[0].payload.as_panel() else {
            panic!("expected art");
        };
        assert!(art.contains("Theme: light"));
    }

    #[test]
    fn ascii_needs_text() {
        let mut env = TestEnv::new();
        let (kind, text) = run_line(&mut env, "ascii").only_text();
        assert_eq!(kind, MessageKind::Warning);
        assert!(text.starts_with("Usage: ascii [text]"));
    }

    #[test]
    fn ascii_boxes_uppercased_text() {
        let mut env = TestEnv::new();
        let (_, text) = run_line(&mut env, "ascii hi").only_text();
        assert_eq!(text, "╔══════╗\n║  HI  ║\n╚══════╝");
    }

    #[test]
    fn eggs_answer_to_aliases() {
        let mut env = TestEnv::new();
        for token in ["party", "rick", "heart", "konami", "tableflip", "game", "b"] {
            let run = run_line(&mut env, token);
            assert_eq!(run.output.replies().len(), 1, "{token}");
        }
        assert_eq!(
            run_line(&mut env, "konami").only_text().0,
            MessageKind::Success
        );
        assert_eq!(run_line(&mut env, "shrug").only_text().1, "¯\\_(ツ)_/¯");
    }
}
