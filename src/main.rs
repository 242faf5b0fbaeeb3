use quicktd::commands::Cli;
use quicktd::libs::messages::{macros::is_debug_mode, Message};
use quicktd::msg_error;

fn main() {
    // A fmt subscriber is only installed in debug mode; the msg_* macros
    // fall back to plain console output otherwise.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    if let Err(err) = Cli::menu() {
        msg_error!(Message::UnexpectedError(err.to_string()));
        std::process::exit(1);
    }
}
