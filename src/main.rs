use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use dom_i18n::{
    Binder, ConsoleReporter, DEFAULT_LANGUAGE, DEFAULT_MARKER, Document, DomTree, LanguageTable,
    Messages, TextRule, VerbosityLevel, apply_rules, is_valid_tag, load_table_from_dir,
};

/// Resolve localized text and bind it into a demo page
#[derive(Parser, Debug)]
#[command(name = "dom-i18n", version)]
struct Args {
    /// Directory of per-language JSON message files; a built-in table is
    /// used when omitted
    #[arg(long, value_name = "DIR")]
    messages: Option<PathBuf>,

    /// Active language tag
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// List the languages in the table and exit
    #[arg(long)]
    list: bool,

    /// Report unmatched rule text as well as missing keys
    #[arg(long)]
    verbose: bool,

    /// Keys to resolve; with no keys, the built-in page demo runs
    keys: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if !is_valid_tag(&args.language) {
        eprintln!("dom-i18n: invalid language tag '{}'", args.language);
        return ExitCode::FAILURE;
    }

    let table = match &args.messages {
        Some(dir) => match load_table_from_dir(dir) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("dom-i18n: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => demo_table(),
    };

    if args.list {
        let mut tags: Vec<&String> = table.keys().collect();
        tags.sort();
        for tag in tags {
            println!("{}", tag);
        }
        return ExitCode::SUCCESS;
    }

    let verbosity = if args.verbose {
        VerbosityLevel::Verbose
    } else {
        VerbosityLevel::Normal
    };
    let mut reporter = ConsoleReporter::with_verbosity(verbosity);

    let binder = Binder::from_table(table, &args.language);

    if !args.keys.is_empty() {
        let resolver = binder.resolver();
        for key in &args.keys {
            println!("{} = {}", key, resolver.resolve(key));
        }
        return ExitCode::SUCCESS;
    }

    run_page_demo(&binder, &mut reporter);
    ExitCode::SUCCESS
}

fn demo_table() -> LanguageTable {
    let mut en = Messages::new();
    en.with_message("greeting", "Hello")
        .with_message("farewell", "Goodbye");
    let mut uk = Messages::new();
    uk.with_message("greeting", "Привіт")
        .with_message("farewell", "До побачення");

    let mut table = LanguageTable::new();
    table.insert("en".to_string(), en);
    table.insert("uk".to_string(), uk);
    table
}

// A page the way the examples shipped it: keyed heading and footer, plus a
// menu addressed only by class and visible text.
fn demo_page() -> DomTree {
    let mut doc = DomTree::new();
    let body = doc.add_element(doc.root(), "body");

    let heading = doc.add_element(body, "h1");
    doc.set_attribute(heading, DEFAULT_MARKER, "greeting");
    doc.set_text(heading, "greeting");

    let footer = doc.add_element(body, "p");
    doc.set_attribute(footer, DEFAULT_MARKER, "farewell");
    doc.set_text(footer, "farewell");

    let list = doc.add_element(body, "ul");
    for name in ["Pork Ribs", "Steak"] {
        let item = doc.add_element(list, "li");
        doc.add_class(item, "menu-item");
        doc.set_text(item, name);
    }
    doc
}

fn menu_rules() -> Vec<TextRule> {
    vec![
        TextRule::new("menu-item", "Pork Ribs", "Свинині ребра"),
        TextRule::new("menu-item", "Steak", "Стейк"),
    ]
}

fn print_page(label: &str, doc: &DomTree) {
    println!("{}:", label);
    for node in doc.select_marked(DEFAULT_MARKER) {
        println!("  <{}> {}", doc.tag(node), doc.text(node));
    }
    for node in doc.select_class("menu-item") {
        println!("  <{}> {}", doc.tag(node), doc.text(node));
    }
}

fn run_page_demo(binder: &Binder, reporter: &mut ConsoleReporter) {
    let mut doc = demo_page();
    print_page("Before", &doc);

    binder.translate(&mut doc, reporter);

    // The menu rules only exist for the Ukrainian rendition
    if binder.language() == "uk" {
        apply_rules(&mut doc, &menu_rules(), reporter);
    }

    print_page(&format!("After ({})", binder.language()), &doc);
}
