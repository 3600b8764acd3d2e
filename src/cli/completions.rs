use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    depboot completions bash > ~/.bash_completion.d/depboot\n\n\
                  Generate zsh completions:\n    depboot completions zsh > ~/.zfunc/_depboot\n\n\
                  Generate fish completions:\n    depboot completions fish > ~/.config/fish/completions/depboot.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
