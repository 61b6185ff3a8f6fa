//! stechuhr main entrypoint.

use stechuhr::run;
use stechuhr::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
