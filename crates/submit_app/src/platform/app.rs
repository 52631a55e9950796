use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use submit_core::{check_url, format_hashtags, Platform, StatusKind, UrlIndicator};
use submit_engine::{
    FileStorage, ReqwestTransport, StatusStore, SubmissionController, SystemClock,
};
use submit_logging::{submit_debug, submit_info};

use super::logging;
use super::ui::render;
use crate::cli::{Cli, Command};
use crate::config::AppConfig;

pub fn run_app(cli: Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::CheckUrl { url } => return Ok(check_url_command(url)),
        Command::FormatHashtags { text } => {
            println!("{}", format_hashtags(text));
            return Ok(ExitCode::SUCCESS);
        }
        Command::Submit { .. } | Command::History | Command::Clear => {}
    }

    let config = AppConfig::resolve(&cli)?;
    let data_dir = config.data_dir();
    logging::initialize(config.log_destination, config.log_level(), &data_dir);
    submit_debug!("Resolved configuration: {:?}", config);

    let mut controller = SubmissionController::new(
        Arc::new(ReqwestTransport::new(config.transport_settings())),
        StatusStore::new(FileStorage::new(&data_dir)),
        Arc::new(SystemClock),
    );

    match cli.command {
        Command::Submit {
            url,
            platforms,
            hashtags,
            description,
        } => submit(&mut controller, &url, &platforms, &hashtags, &description),
        Command::History => {
            render::print_lines(&render::render_history(&controller.view()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Clear => {
            controller.clear_history();
            submit_info!("Submission history cleared");
            render::print_lines(&render::render_history(&controller.view()));
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckUrl { .. } | Command::FormatHashtags { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn submit(
    controller: &mut SubmissionController,
    url: &str,
    platforms: &[Platform],
    hashtags: &str,
    description: &str,
) -> Result<ExitCode> {
    controller.edit_url(url);
    if let Some(feedback) = render::render_url_feedback(&controller.view()) {
        eprintln!("{feedback}");
    }
    for platform in platforms {
        controller.set_platform(*platform, true);
    }
    controller.edit_hashtags(hashtags);
    controller.edit_description(description);

    let mut live = render::LiveRenderer::new();
    controller.set_observer(move |view| render::print_lines(&live.lines_for(view)));

    // One request at a time on the current thread; no parallelism is needed.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let last = runtime.block_on(controller.submit());

    let failed = last.map_or(true, |entry| entry.kind == StatusKind::Error);
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn check_url_command(url: &str) -> ExitCode {
    match check_url(url) {
        UrlIndicator::Valid => {
            println!("valid");
            ExitCode::SUCCESS
        }
        UrlIndicator::Neutral => {
            println!("empty");
            ExitCode::FAILURE
        }
        UrlIndicator::Invalid => {
            println!("{}", UrlIndicator::Invalid.error_message().unwrap_or("invalid"));
            ExitCode::FAILURE
        }
    }
}
