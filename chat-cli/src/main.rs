// ABOUTME: Interactive chat agent with weather, arithmetic, time, and unit
// ABOUTME: conversion tools. Demonstrates the relay dispatch loop.

use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;

use relay::prelude::*;

const MODEL: &str = "gemini-2.5-flash";

const SYSTEM_PROMPT: &str = "You are a helpful assistant. You have access to tools for \
     looking up weather, doing arithmetic, telling the time, and converting units. \
     Use them when they help answer the user's question. Be concise.";

fn print_help() {
    println!("Commands:");
    println!("  help        Show this help");
    println!("  tools       List available tools");
    println!("  quit, exit  Leave the chat");
    println!("Anything else is sent to the model.");
}

async fn print_tools(registry: &Registry) {
    for def in registry.to_definitions().await {
        println!("  {} - {}", def.name, def.description);
    }
}

async fn run_chat_loop(dispatcher: &Dispatcher, session: &mut ChatSession) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Chat agent - type 'help' for commands.\n");

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "tools" => {
                print_tools(dispatcher.registry()).await;
                continue;
            }
            _ => {}
        }

        let _ = rl.add_history_entry(line);

        // A failed turn leaves the session usable for the next prompt.
        match dispatcher.run_turn(session, line).await {
            Ok(TurnOutcome::Answer(text)) => println!("\n{}\n", text),
            Ok(TurnOutcome::CycleLimit { cycles }) => {
                println!("\n[Stopped after {} tool calls without a final answer]\n", cycles);
            }
            Err(e) => println!("\n[Backend error: {}]\n", e),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Arc::new(GeminiClient::from_env()?);

    let registry = Registry::new();
    registry.register(CalculateTool).await?;
    registry.register(TimeTool).await?;
    registry.register(ConvertTool).await?;
    match WeatherTool::from_env() {
        Ok(tool) => registry.register(tool).await?,
        Err(e) => println!("[Weather tool disabled: {}]", e),
    }

    println!("Tools: {}\n", registry.list().await.join(", "));

    let mut session = ChatSession::new(client, MODEL)
        .system(SYSTEM_PROMPT)
        .tools(registry.to_definitions().await)
        .max_tokens(4096);
    let dispatcher = Dispatcher::new(registry);

    run_chat_loop(&dispatcher, &mut session).await
}
