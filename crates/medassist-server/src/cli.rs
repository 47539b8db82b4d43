//! Interactive terminal mode.

use medassist_core::i18n;
use medassist_runtime::AiService;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Inputs that end the interactive session.
pub const EXIT_COMMANDS: &[&str] = &["quit", "выход", "q"];

/// Sample inputs answered before the prompt appears.
pub const SAMPLE_INPUTS: &[&str] = &["У меня болит голова и температура", "thank you!"];

pub fn is_exit_command(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&lower.as_str())
}

/// Answer the sample inputs.
pub async fn run_samples(service: &AiService) {
    println!("Running sample questions...\n");
    for (i, input) in SAMPLE_INPUTS.iter().enumerate() {
        let reply = service.respond(input, None).await;
        println!("Sample {}: {}", i + 1, input);
        println!("Reply: {}\n", reply.text);
    }
}

/// Read questions from stdin until an exit command or EOF.
pub async fn run_interactive(service: &AiService) -> std::io::Result<()> {
    println!("Interactive mode (type 'quit' to exit):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"\nQuestion: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if is_exit_command(&line) {
            println!("Goodbye!");
            break;
        }

        let language = service.detect_language(&line);
        println!("{}", service.localizer().message(language, i18n::PROCESSING));
        let reply = service.respond(&line, None).await;
        println!("Reply: {}", reply.text);
    }

    Ok(())
}

/// Samples followed by the interactive loop. Warns up front when the model
/// does not answer, since every reply will then be a fallback.
pub async fn run(service: &AiService) -> std::io::Result<()> {
    if !service.model().is_available().await {
        let language = service.localizer().default_language();
        eprintln!("{}", service.localizer().message(language, i18n::MODEL_ERROR));
    }
    run_samples(service).await;
    run_interactive(service).await
}
