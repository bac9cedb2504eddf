// src/main.rs  -  farm-connect  entry point
use anyhow::{Context, Result};
use clap::Parser;
use farm_connect::config::{self, AppConfig, Cli};
use farm_connect::i18n::{self, Language, TranslationTable};
use farm_connect::{app, auth, tui};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        println!("Edit it to set your language, role and phone number.");
        return Ok(());
    }

    // ── Phrase table (built once, lent to every screen) ───────────────────────
    let table = TranslationTable::builtin().context("Building the phrase table")?;
    log::info!("[i18n] {} phrases loaded", table.len());

    // ── --list-keys  ──────────────────────────────────────────────────────────
    if cli.list_keys {
        for key in table.keys() {
            println!("{key}");
            for lang in Language::ALL {
                println!("  {:<3} {}", lang.code(), table.resolve(key, lang));
            }
        }
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;

    // ── App state ─────────────────────────────────────────────────────────────
    let mut app = app::App::new(&cfg, Box::new(auth::MockAuthGateway::new()));

    // ── TUI ───────────────────────────────────────────────────────────────────
    let mut tui = tui::Tui::new()?;

    // ── Main loop ─────────────────────────────────────────────────────────────
    // Draw, block for one key, apply it. No timers, no background work.
    let result = (|| -> Result<()> {
        while !app.quit {
            tui.draw(&app, &table)?;
            let input = tui.next_input()?;
            app.handle(input);
        }
        Ok(())
    })();

    // ── Cleanup ───────────────────────────────────────────────────────────────
    tui.cleanup();
    result?;

    println!("\n{}\n", table.resolve(i18n::keys::tagline, app.language));
    Ok(())
}
