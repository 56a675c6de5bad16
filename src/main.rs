use crate::config::{app_id, app_name, app_version};
use crate::display::{
    DisplayControlImpl, DisplayMode, LoggerSink, ModeNegotiator, NegotiationOutcome,
};
use clap::{Arg, Command, value_parser};
use interprocess::local_socket::traits::Stream;
use interprocess::local_socket::{GenericNamespaced, ListenerOptions, ToNsName};
use log::info;
use std::process;

pub mod config;
pub mod display;

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Command::new(app_name())
        .version(app_version())
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .help("Horizontal resolution to request.")
                .required(true)
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .help("Vertical resolution to request.")
                .required(true)
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("refresh")
                .short('r')
                .long("refresh")
                .value_name("HZ")
                .help("Refresh rate to request; virtual drivers may reject it.")
                .default_value("60")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("multi-instance")
                .short('m')
                .long("multi")
                .value_name("MULTI INSTANCE")
                .help("Allow multiple concurrent negotiations (yes/no).")
                .required(false)
                .default_missing_value("yes")
                .ignore_case(true)
                .num_args(0..=1)
                .default_value("no"),
        )
        .get_matches();

    let multi_instances = match matches.get_one::<String>("multi-instance") {
        Some(val) => &val.to_lowercase() == "yes",
        None => false,
    };

    // A mode change blanks the monitor for a moment; overlapping
    // negotiations from this tool are refused rather than interleaved.
    let _instance_guard = if multi_instances {
        None
    } else {
        let name = app_id().to_ns_name::<GenericNamespaced>().unwrap();
        if interprocess::local_socket::Stream::connect(name).is_ok() {
            info!("Another negotiation is already running, exiting");
            return;
        }
        let name = app_id().to_ns_name::<GenericNamespaced>().unwrap();
        ListenerOptions::new().name(name).create_sync().ok()
    };

    // gracefully close the app when receiving SIGINT, SIGTERM, or SIGHUP
    ctrlc::set_handler(move || {
        process::exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    let mode = DisplayMode::new(
        *matches.get_one::<u32>("width").unwrap(),
        *matches.get_one::<u32>("height").unwrap(),
        *matches.get_one::<u32>("refresh").unwrap(),
    );

    let mut negotiator = ModeNegotiator::new(DisplayControlImpl::new(), LoggerSink);
    let outcome = negotiator.negotiate(mode);

    process::exit(match outcome {
        NegotiationOutcome::Full | NegotiationOutcome::ResolutionOnly => 0,
        NegotiationOutcome::Rejected(_) => 1,
        NegotiationOutcome::QueryFailed => 2,
    });
}
