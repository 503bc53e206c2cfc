mod config;

use std::io::{BufRead, Write};

use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use config::Config;

fn main() -> std::io::Result<()> {
    let config = Config::load();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(config.log_filter.clone()),
        )
        .init();

    if let Some(directives) = &config.rejected_filter {
        warn!(directives = %directives, "ignoring invalid CALC_LOG");
    }

    println!("calc REPL: ");

    let mut stdout = std::io::stdout();
    let mut stdin = std::io::stdin().lock();

    loop {
        print!("\x1b[0;36m > ");

        print!("\x1b[0;0m");

        stdout.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        match calc::evaluate(expression) {
            Ok(result) if config.show_expression => println!("{expression} = {result}"),
            Ok(result) => println!("{result}"),
            Err(error) => println!("Unable to evaluate expression: {error}"),
        }
    }
}
