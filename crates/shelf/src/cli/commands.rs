use super::logging::init_logging;
use super::render::{
    print_messages, render_delete_prompt, render_field_errors, render_messages,
    render_product_list, render_product_list_json,
};
use super::setup::{resolve_sort, Cli, Commands, OutputMode};
use anyhow::{anyhow, bail, Context as _};
use clap::Parser;
use console::Term;
use shelfapp::api::{CmdMessage, CmdResult};
use shelfapp::error::ShelfError;
use shelfapp::form::ProductDraft;
use shelfapp::init::{initialize, ShelfContext};
use shelfapp::view::{ListQuery, SortOrder};
use std::io::IsTerminal;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    let output = cli.output;

    match cli.command {
        Some(Commands::Add {
            code,
            name,
            description,
            quantity,
        }) => handle_add(&mut ctx, ProductDraft::new(code, name, description, quantity), output),
        Some(Commands::List {
            search,
            sort,
            asc,
            desc,
            images,
            no_images,
        }) => {
            let order = resolve_sort(sort, asc, desc, ctx.config.default_sort());
            let with_images = (images || ctx.config.images) && !no_images;
            handle_list(&ctx, search.unwrap_or_default(), order, with_images, output)
        }
        Some(Commands::Delete { code, yes }) => handle_delete(&mut ctx, code, yes, output),
        None => {
            let order = ctx.config.default_sort();
            let with_images = ctx.config.images;
            handle_list(&ctx, String::new(), order, with_images, output)
        }
    }
}

fn handle_add(ctx: &mut ShelfContext, draft: ProductDraft, output: OutputMode) -> anyhow::Result<()> {
    match ctx.api.create_product(&draft) {
        Ok(result) => emit(result, output),
        Err(ShelfError::Validation(errors)) => {
            if output == OutputMode::Json {
                eprintln!("{}", serde_json::to_string_pretty(&errors)?);
            } else {
                eprint!("{}", render_field_errors(&errors));
            }
            bail!("Product was not created")
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_list(
    ctx: &ShelfContext,
    search: String,
    order: SortOrder,
    with_images: bool,
    output: OutputMode,
) -> anyhow::Result<()> {
    let query = ListQuery::new(search, order);
    let result = ctx.api.list_products(&query)?;

    let images = if with_images && !result.listed_products.is_empty() {
        Some(fetch_images(ctx, &result)?)
    } else {
        None
    };

    match output {
        OutputMode::Json => {
            println!(
                "{}",
                render_product_list_json(&result.listed_products, images.as_deref())?
            );
        }
        OutputMode::Text => {
            print!(
                "{}",
                render_product_list(&result.listed_products, images.as_deref())
            );
            print_messages(&result.messages);
        }
    }
    Ok(())
}

/// Look up a thumbnail per listed product. Lookups run concurrently and a
/// failed one leaves its slot empty.
fn fetch_images(ctx: &ShelfContext, result: &CmdResult) -> anyhow::Result<Vec<Option<String>>> {
    let names: Vec<String> = result
        .listed_products
        .iter()
        .map(|p| p.name.clone())
        .collect();

    let lookup = match ctx.image_lookup() {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::warn!(error = %e, "image lookup unavailable");
            return Ok(vec![None; names.len()]);
        }
    };
    if !lookup.has_key() {
        tracing::warn!("no image API key configured (set pixabay_key or PIXABAY_KEY)");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(lookup.lookup_all(names)))
}

fn handle_delete(ctx: &mut ShelfContext, code: u64, yes: bool, output: OutputMode) -> anyhow::Result<()> {
    if let Some(product) = ctx.api.delete_preview(code) {
        if !yes && !confirm(&render_delete_prompt(&product))? {
            return emit(cancelled(), output);
        }
    }
    let result = ctx.api.delete_product(code)?;
    emit(result, output)
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow!(
            "refusing to delete without confirmation; pass --yes to skip the prompt"
        ));
    }
    let term = Term::stderr();
    term.write_str(prompt)?;
    let answer = term.read_line()?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn cancelled() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Deletion cancelled."));
    result
}

fn format_result(result: &CmdResult, output: OutputMode) -> anyhow::Result<String> {
    Ok(match output {
        OutputMode::Json => format!("{}\n", serde_json::to_string_pretty(result)?),
        OutputMode::Text => render_messages(&result.messages),
    })
}

fn emit(result: CmdResult, output: OutputMode) -> anyhow::Result<()> {
    print!("{}", format_result(&result, output)?);
    Ok(())
}
