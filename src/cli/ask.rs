//! `routewise ask` and `routewise chat`

use super::select::print_selection;
use crate::settings::AppConfig;
use routewise_llm::{
    ModelSelector, PromptRouter, ProviderCredentials, ProviderGateway, RoutedResponse,
    SelectionMode, UsageHistory,
};
use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio_util::sync::CancellationToken;
use tracing::warn;

fn build_router(config: &AppConfig) -> anyhow::Result<PromptRouter> {
    let credentials = ProviderCredentials::from_env();
    if credentials.is_empty() {
        warn!("No provider API keys set; set OPENROUTER_API_KEY, MISTRAL_API_KEY or GOOGLE_API_KEY");
    }
    let gateway = ProviderGateway::from_credentials(&credentials, &config.gateway.to_gateway_config())?;
    let selector = ModelSelector::with_builtin_catalog(Arc::new(UsageHistory::new()))?;
    Ok(PromptRouter::new(Arc::new(selector), Arc::new(gateway)))
}

/// Respond to one prompt; Ctrl-C cancels and yields `Ok(None)`
async fn respond_cancellable(
    router: &PromptRouter,
    prompt: &str,
    mode: &SelectionMode,
) -> anyhow::Result<Option<RoutedResponse>> {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    let result = router.respond(prompt, mode, &cancel).await;
    ctrl_c.abort();

    match result {
        Ok(response) => Ok(Some(response)),
        Err(e) if e.is_cancelled() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub async fn run(prompt: &str, mode: &SelectionMode, config: &AppConfig) -> anyhow::Result<()> {
    let router = build_router(config)?;

    match respond_cancellable(&router, prompt, mode).await? {
        Some(response) => {
            print_selection(&response.selection);
            println!();
            println!("{}", response.content);
        }
        None => println!("Request cancelled"),
    }
    Ok(())
}

/// One line of chat input
#[derive(Debug, PartialEq, Eq)]
enum ChatInput {
    Prompt(String),
    Blank,
    Quit,
}

/// Read the next prompt; EOF, `exit`, `quit` or `interrupt` end the session
async fn next_input<R>(
    lines: &mut Lines<R>,
    interrupt: impl Future<Output = ()>,
) -> anyhow::Result<ChatInput>
where
    R: AsyncBufRead + Unpin,
{
    let line = tokio::select! {
        biased;
        () = interrupt => return Ok(ChatInput::Quit),
        line = lines.next_line() => line?,
    };
    let Some(line) = line else {
        return Ok(ChatInput::Quit);
    };
    Ok(match line.trim() {
        "" => ChatInput::Blank,
        "exit" | "quit" => ChatInput::Quit,
        prompt => ChatInput::Prompt(prompt.to_string()),
    })
}

/// Resolves on Ctrl-C; never resolves if the signal cannot be watched
async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

pub async fn chat(mode: &SelectionMode, config: &AppConfig) -> anyhow::Result<()> {
    let router = build_router(config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let prompt = match next_input(&mut lines, ctrl_c()).await? {
            ChatInput::Prompt(prompt) => prompt,
            ChatInput::Blank => continue,
            ChatInput::Quit => break,
        };

        match respond_cancellable(&router, &prompt, mode).await {
            Ok(Some(response)) => {
                let selection = &response.selection;
                println!(
                    "[{} | confidence {:.0}% | ${:.6}]",
                    selection.selected_model.name,
                    selection.confidence_score * 100.0,
                    selection.estimated_cost
                );
                println!("{}\n", response.content);
            }
            Ok(None) => println!("Request cancelled\n"),
            Err(e) => println!("Error: {e}\n"),
        }
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{pending, ready};

    #[tokio::test]
    async fn test_next_input_reads_prompts() {
        let mut lines = BufReader::new(&b"  hello there \n\nquit\nignored\n"[..]).lines();

        assert_eq!(
            next_input(&mut lines, pending()).await.unwrap(),
            ChatInput::Prompt("hello there".to_string())
        );
        assert_eq!(next_input(&mut lines, pending()).await.unwrap(), ChatInput::Blank);
        assert_eq!(next_input(&mut lines, pending()).await.unwrap(), ChatInput::Quit);
    }

    #[tokio::test]
    async fn test_next_input_quits_at_eof() {
        let mut lines = BufReader::new(&b""[..]).lines();
        assert_eq!(next_input(&mut lines, pending()).await.unwrap(), ChatInput::Quit);
    }

    #[tokio::test]
    async fn test_interrupt_ends_a_waiting_prompt() {
        // the writer half stays open, so the read never completes
        let (_writer, reader) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();

        let input = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            next_input(&mut lines, ready(())),
        )
        .await
        .expect("interrupt should end the wait");
        assert_eq!(input.unwrap(), ChatInput::Quit);
    }

    #[tokio::test]
    async fn test_interrupt_after_earlier_turns() {
        let (mut writer, reader) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();
        tokio::io::AsyncWriteExt::write_all(&mut writer, b"first\n")
            .await
            .unwrap();

        assert_eq!(
            next_input(&mut lines, pending()).await.unwrap(),
            ChatInput::Prompt("first".to_string())
        );
        assert_eq!(next_input(&mut lines, ready(())).await.unwrap(), ChatInput::Quit);
    }
}
