use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn display_banner() {
    println!(r#"
       _ _    __               _
  __ _(_) |_ / _|_ __ ___  ___| |__
 / _` | | __| |_| '__/ _ \/ __| '_ \
| (_| | | |_|  _| | |  __/\__ \ | | |
 \__, |_|\__|_| |_|  \___||___/_| |_|
 |___/
"#);

    let mut cmd = crate::Cli::command();
    let _ = cmd.print_help();
    println!();
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = crate::Cli::command();
    generate(shell, &mut cmd, "gitfresh", &mut io::stdout());

    eprintln!();
    eprintln!("Save the output to the appropriate location for your shell:");
    match shell {
        Shell::Bash => {
            eprintln!("  gitfresh completions bash > ~/.local/share/bash-completion/completions/gitfresh");
        }
        Shell::Zsh => {
            eprintln!("  gitfresh completions zsh > ~/.zsh/completions/_gitfresh");
            eprintln!("  # (Add 'fpath=(~/.zsh/completions $fpath)' before 'compinit' in .zshrc)");
        }
        Shell::Fish => {
            eprintln!("  gitfresh completions fish > ~/.config/fish/completions/gitfresh.fish");
        }
        _ => {}
    }
}
