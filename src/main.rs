#![allow(missing_docs)]

use clap::{Parser, Subcommand};

use blendspec::export::{ExportAdapter, ExportMenu};

mod cmd;

#[derive(Parser)]
#[command(name = "blendspec", about = "Export typed TypeScript scene declarations from .blend files")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Export(cmd::export::Args),
	Scene(cmd::scene::Args),
	Info(cmd::info::Args),
	Menu,
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> blendspec::blend::Result<()> {
	let cli = Cli::parse();

	let adapter = ExportAdapter;
	let mut menu = ExportMenu::default();
	adapter.activate(&mut menu);

	let result = match cli.command {
		Commands::Export(args) => cmd::export::run(&menu, args),
		Commands::Scene(args) => cmd::scene::run(args),
		Commands::Info(args) => cmd::info::run(args),
		Commands::Menu => cmd::menu::run(&menu),
	};

	adapter.deactivate(&mut menu);
	result
}
