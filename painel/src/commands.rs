use crate::CLAP_STYLING;
use clap::{arg, command};
use painel_map::config::DEFAULT_TILE_URL;
use painel_scanner::DEFAULT_USER_AGENT;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("painel")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("painel")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Show debug logging on stderr")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("check-links")
                .about(
                    "Extract every `link: \"URL\"` from a source file, probe each URL and write a \
                status report.",
                )
                .arg(
                    arg!([INPUT])
                        .required(false)
                        .help("Source file to scan for links")
                        .default_value("src/data/dataSources.js"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to write the status report (overwritten)")
                        .default_value("link_statuses.txt"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"user-agent" <UA>)
                        .required(false)
                        .help("User-Agent header sent with each probe")
                        .default_value(DEFAULT_USER_AGENT),
                ),
        )
        .subcommand(
            command!("serve-map")
                .about("Serve the map game scaffold page")
                .arg(
                    arg!(--"host" <HOST>)
                        .required(false)
                        .help("Address to bind")
                        .default_value("127.0.0.1"),
                )
                .arg(
                    arg!(-p --"port" <PORT>)
                        .required(false)
                        .help("Port to listen on")
                        .value_parser(clap::value_parser!(u16))
                        .default_value("8050"),
                )
                .arg(
                    arg!(--"token" <TOKEN>)
                        .required(false)
                        .help("Map tile provider access token")
                        .env("MAPBOX_TOKEN")
                        .hide_env_values(true),
                )
                .arg(
                    arg!(--"tile-url" <URL>)
                        .required(false)
                        .help("Tile endpoint template with {z}/{x}/{y} placeholders")
                        .default_value(DEFAULT_TILE_URL),
                )
                .arg(
                    arg!(--"center-lat" <LAT>)
                        .required(false)
                        .help("Initial map center latitude")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("-15"),
                )
                .arg(
                    arg!(--"center-lon" <LON>)
                        .required(false)
                        .help("Initial map center longitude")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("-50"),
                )
                .arg(
                    arg!(-z --"zoom" <ZOOM>)
                        .required(false)
                        .help("Initial zoom level")
                        .value_parser(clap::value_parser!(u8))
                        .default_value("4"),
                ),
        )
}
