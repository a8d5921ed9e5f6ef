//! Analisa uma transação em base64 antes da assinatura.
//!
//! ```bash
//! RUST_LOG=vibeguard=debug cargo run -p vibeguard-sdk --example analyze_tx -- <BASE64_TX> <REDE> [ENDERECO]
//! ```
//!
//! Endpoints podem ser sobrescritos com `SUI_RPC_MAINNET`, `SUI_RPC_TESTNET` e
//! `SUI_RPC_DEVNET`. Com `GEMINI_API_KEY` definida a explicação usa o modelo.

use std::env;

use tracing_subscriber::EnvFilter;
use vibeguard_sdk::{AnalysisOutcome, AnalysisRequest, Analyzer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vibeguard=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Uso: {} <BASE64_TX> <mainnet|testnet|devnet> [ENDERECO]", args[0]);
        std::process::exit(1);
    }

    let mut request = AnalysisRequest::new(args[1].clone(), args[2].clone());
    if let Some(address) = args.get(3) {
        request = request.with_viewer(address.clone());
    }

    let analyzer = Analyzer::from_env()?;
    let outcome: AnalysisOutcome = analyzer.explain(&request).await.into();

    if let Some(report) = outcome.report() {
        println!("Risco: {}", report.risk_verdict.tier);
        println!("Confiança: {:.2}", report.risk_verdict.confidence);
        for reason in &report.risk_verdict.reasons {
            println!("  - {}", reason);
        }
        for note in &report.effects_summary.uncertainty_notes {
            println!("  ! {}", note);
        }
        if let Some(explanation) = &report.explanation {
            println!("{}: {}", explanation.headline, explanation.recommended_action);
            println!("{}", explanation.plain_english_summary);
        }
    }

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
