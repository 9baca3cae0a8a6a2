#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, process};

use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use lineform_ui::component::text;

use lineform_gui::{app::App, config::Config, logger, VERSION};

#[derive(Debug, PartialEq)]
enum Arg {
    Token(String),
    ApiUrl(String),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: lineform [OPTIONS]

Options:
    --token <TOKEN>     Login token issued by the chat platform
    --api <URL>         Base URL of the backend API
    -v, --version       Display lineform version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--token" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::Token(a.clone()));
            } else {
                return Err("missing arg to --token".into());
            }
        } else if arg == "--api" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ApiUrl(a.clone()));
            } else {
                return Err("missing arg to --api".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown argument {}", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let mut api_url = None;
    let mut token = None;
    for arg in parse_args(std::env::args().collect())? {
        match arg {
            Arg::ApiUrl(url) => api_url = Some(url),
            Arg::Token(t) => token = Some(t),
        }
    }
    let config = Config::new(api_url, token)?;

    let log_level = logger::parse_log_level()?;
    logger::setup_logger(log_level.unwrap_or(LevelFilter::INFO));
    setup_panic_hook();

    let settings = Settings {
        id: Some("Lineform".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 480.0,
            height: 860.0,
        },
        min_size: Some(Size {
            width: 420.0,
            height: 600.0,
        }),
        position: iced::window::Position::Default,
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["--meth".into()]).is_err());
        assert!(parse_args(vec!["--token".into()]).is_err());
        assert!(parse_args(vec!["--api".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::Token("U1234".into())]),
            parse_args("--token U1234".split(' ').map(|a| a.to_string()).collect()).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::Token("U1234".into()),
                Arg::ApiUrl("https://example.com".into())
            ]),
            parse_args(
                "--token U1234 --api https://example.com"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ApiUrl("https://example.com".into()),
                Arg::Token("U1234".into()),
            ]),
            parse_args(
                "--api https://example.com --token U1234"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
