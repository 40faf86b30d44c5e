mod cli;
mod dispatch;
mod logging;
mod settings_file;
mod tui;

fn main() {
    if let Err(error) = dispatch::run() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
