//! Terminal front end: every Enter is a click.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::generation::SentenceClient;
use crate::session::{ClickOutcome, Controller, LOADING_MESSAGE};
use crate::settings::CredentialStore;

/// Drive one controller from `input` until EOF or `q`.
pub async fn run<R, W>(
    input: R,
    mut out: W,
    generator: &SentenceClient,
    credentials: &dyn CredentialStore,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut controller = Controller::new(&mut rand::rng());
    writeln!(out, "Appuyez sur Entrée pour cliquer, q pour quitter.")?;
    render(&mut out, &controller)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let credential = credentials.credential()?;
        let outcome = controller.click(credential.is_some(), &mut rand::rng());
        if let ClickOutcome::Generate(words) = outcome {
            writeln!(out, "{}", LOADING_MESSAGE)?;
            out.flush()?;
            let result = generator
                .generate(&words, credential.as_deref())
                .await
                .map_err(|e| {
                    tracing::warn!("Sentence generation failed: {}", e);
                    e.user_message()
                });
            controller.resolve(result);
        }

        render(&mut out, &controller)?;
    }

    Ok(())
}

fn render<W: Write>(out: &mut W, controller: &Controller) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "    {}", controller.display_text())?;
    writeln!(out, "    {}", controller.hint())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::generation::MISSING_CREDENTIAL_MESSAGE;
    use std::io::Cursor;

    fn empty_store() -> Database {
        let db = Database::open_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    #[tokio::test]
    async fn ten_clicks_without_key_show_missing_credential() {
        let generator = SentenceClient::new("http://127.0.0.1:9", "m");
        let input = Cursor::new("\n".repeat(10));
        let mut out = Vec::new();

        run(input, &mut out, &generator, &empty_store()).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cliquez sur le mot (9/10)"));
        assert!(text.contains(MISSING_CREDENTIAL_MESSAGE));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn q_stops_before_any_click() {
        let generator = SentenceClient::new("http://127.0.0.1:9", "m");
        let input = Cursor::new("q\n\n\n");
        let mut out = Vec::new();

        tokio_test::block_on(run(input, &mut out, &generator, &empty_store())).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cliquez sur le mot (0/10)"));
        assert!(!text.contains("(1/10)"));
    }
}
