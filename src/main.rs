use std::process::ExitCode;

fn main() -> ExitCode {
    d20::boot::boot()
}
