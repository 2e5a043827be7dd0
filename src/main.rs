// native repl over the same session core the frontend embeds - handy for
// poking at the shell without a browser
use std::io::{self, Write};

use hypros::boot::BOOT_SCRIPT;
use hypros::command::Intent;
use hypros::context::TerminalContext;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut ctx = TerminalContext::new();
    for line in BOOT_SCRIPT {
        println!("{}", line.text);
    }
    println!();
    for line in &ctx.history {
        println!("{}", line);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{}", ctx.prompt());
        stdout.flush().unwrap();

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) | Err(_) => break, // eof or broken pipe
            Ok(_) => {}
        }

        let result = ctx.execute(input.trim_end());
        if result.cleared {
            print!("\x1b[2J\x1b[H");
            continue;
        }
        for line in &result.lines {
            println!("{}", line);
        }

        match result.intent {
            Some(Intent::Exit) => break,
            Some(Intent::Navigate { view }) => println!("[shell] navigate -> {}", view),
            Some(Intent::OpenFile { path }) => println!("[shell] open editor -> {}", path),
            Some(Intent::Hire) => println!("[shell] hire sequence"),
            None => {}
        }
    }
}
