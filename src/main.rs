// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{App, Flags, Message};
use gallery_lens::config::{self, Config, DiscoveryMode};
use gallery_lens::domain::gallery::{CategoryFilter, FolderSpec, GalleryState, ImageRecord};
use gallery_lens::error::{Error, Result};
use gallery_lens::gallery::{self, ScanOptions};
use gallery_lens::i18n::fluent::I18n;
use gallery_lens::infrastructure::{FsAssets, HtmlDocument, HttpAssets};
use gallery_lens::{logging, manifest};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
gallery-lens: discover, paginate and index photo gallery images

USAGE:
  gallery-lens [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
  scan      Discover images and print the first pages
              --base <URL|DIR>   Where the photo folders live
              --filter <CAT>     Only show one category (default: all)
              --pages <N>        Number of pages to print (default: 1)
  render    Render the first page into an HTML template
              --template <FILE>  Page holding the gallery container
              --out <FILE>       Where to write the rendered page
              --base <URL|DIR>   Where the photo folders live
              --filter <CAT>     Only show one category (default: all)
  index     Write index.json manifests for every photo folder
              --root <DIR>       Local photos directory
              --watch, -w        Keep manifests updated until Ctrl+C

OPTIONS:
  --config-dir <DIR>           Directory holding settings.toml
  --lang <LOCALE>              Output language (e.g. en-US, fr)
  --discovery <probe|manifest> How images are discovered
  -h, --help                   Print this help
";

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    logging::init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(mut args: pico_args::Arguments) -> Result<()> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        discovery: args.opt_value_from_fn("--discovery", str::parse::<DiscoveryMode>)?,
    };
    let (mut config, warning) = config::load(flags.config_dir.clone());
    if let Some(discovery) = flags.discovery {
        config.scan.discovery = discovery;
    }
    let i18n = I18n::new(flags.lang.clone(), &config);
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }

    let command = args.subcommand()?;
    match command.as_deref() {
        Some("scan") => scan(args, &config, &i18n)
            .await
            .inspect_err(|err| report(&i18n, err)),
        Some("render") => render(args, &config, i18n).await,
        Some("index") => index(args, &config, &i18n)
            .await
            .inspect_err(|err| report(&i18n, err)),
        Some(other) => Err(Error::InvalidArgument(format!("unknown command '{other}'"))),
        None => {
            print!("{HELP}");
            Ok(())
        }
    }
}

/// Prints the localized message of errors that have one.
fn report(i18n: &I18n, err: &Error) {
    match err {
        Error::Manifest(manifest) => eprintln!("{}", i18n.tr(manifest.i18n_key())),
        Error::MissingContainer(id) => eprintln!(
            "{}",
            i18n.tr_with_args("error-missing-container", &[("id", id.as_str())])
        ),
        _ => {}
    }
}

/// Fails on arguments no command consumed.
fn ensure_consumed(args: pico_args::Arguments) -> Result<()> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("unexpected arguments: {rest:?}")))
    }
}

fn parse_filter(value: Option<String>) -> CategoryFilter {
    value
        .map(|v| v.parse().unwrap_or_default())
        .unwrap_or_default()
}

async fn scan(mut args: pico_args::Arguments, config: &Config, i18n: &I18n) -> Result<()> {
    let base: Option<String> = args.opt_value_from_str("--base")?;
    let filter = parse_filter(args.opt_value_from_str("--filter")?);
    let pages: usize = args.opt_value_from_str("--pages")?.unwrap_or(1);
    ensure_consumed(args)?;

    let base = base.unwrap_or_else(|| config.scan.base_path.clone());
    let folders = config.folder_specs();
    let images = discover_images(config, &base, &folders, i18n).await?;

    for folder in &folders {
        let prefix = folder.file_path(&base, "");
        let count = images
            .iter()
            .filter(|i| i.path.starts_with(&prefix))
            .count()
            .to_string();
        println!(
            "{}",
            i18n.tr_with_args(
                "scan-folder-summary",
                &[("folder", folder.internal_name.as_str()), ("count", count.as_str())],
            )
        );
    }
    let (count, folder_count) = (images.len().to_string(), folders.len().to_string());
    println!(
        "{}",
        i18n.tr_with_args(
            "scan-total-summary",
            &[("count", count.as_str()), ("folders", folder_count.as_str())],
        )
    );

    let label = i18n.tr("gallery-load-more");
    println!(
        "{}",
        i18n.tr_with_args("scan-filter", &[("filter", i18n.filter_label(&filter).as_str())])
    );
    let mut state = GalleryState::new(images, config.page_size());
    for page in 1..=pages {
        let instructions = if page == 1 {
            state.set_filter(filter.clone(), &label)
        } else {
            state.load_page(&label)
        };
        let page = page.to_string();
        let shown = state.displayed_count().to_string();
        let total = state.filtered_count().to_string();
        println!();
        println!(
            "{}",
            i18n.tr_with_args(
                "scan-page-header",
                &[
                    ("page", page.as_str()),
                    ("shown", shown.as_str()),
                    ("total", total.as_str()),
                ],
            )
        );
        for image in instructions.iter().filter_map(|i| i.appended_image()) {
            println!("  {}  {}", image.title, image.path);
        }
        if !state.has_more() {
            break;
        }
    }
    if state.filtered_count() == 0 {
        println!("{}", i18n.tr("gallery-empty"));
    }
    Ok(())
}

async fn render(mut args: pico_args::Arguments, config: &Config, i18n: I18n) -> Result<()> {
    let (document, images, filter, out) = async {
        let template: PathBuf = args.value_from_str("--template")?;
        let out: PathBuf = args.value_from_str("--out")?;
        let base: Option<String> = args.opt_value_from_str("--base")?;
        let filter = parse_filter(args.opt_value_from_str("--filter")?);
        ensure_consumed(args)?;

        let template = tokio::fs::read_to_string(&template).await?;
        let document = HtmlDocument::parse(
            &template,
            &config.gallery.container_id,
            config.gallery.load_more_id.as_deref(),
        )?;

        let base = base.unwrap_or_else(|| config.scan.base_path.clone());
        let folders = config.folder_specs();
        let images = discover_images(config, &base, &folders, &i18n).await?;
        Ok::<_, Error>((document, images, filter, out))
    }
    .await
    .inspect_err(|err| report(&i18n, err))?;

    let mut app = App::init(document, images, i18n, config)?;
    app.update(Message::RenderCompleted);
    if filter.is_active() {
        app.update(Message::FilterSelected(filter));
        app.update(Message::RenderCompleted);
    }

    tokio::fs::write(&out, app.target().to_html()).await?;
    tracing::info!(
        path = %out.display(),
        cards = app.target().card_count(),
        "page rendered"
    );
    Ok(())
}

async fn index(mut args: pico_args::Arguments, config: &Config, i18n: &I18n) -> Result<()> {
    let root: Option<PathBuf> = args.opt_value_from_str("--root")?;
    let watch = args.contains(["-w", "--watch"]);
    ensure_consumed(args)?;

    let root = root.unwrap_or_else(|| config.manifest.photos_root.clone());
    let folders = config.folder_specs();
    let summary = {
        let (root, folders) = (root.clone(), folders.clone());
        tokio::task::spawn_blocking(move || manifest::generate_all_indexes(&root, &folders))
            .await??
    };

    for folder in &summary.folders {
        let path = folder.index_path.display().to_string();
        let count = folder.count.to_string();
        println!(
            "{}",
            i18n.tr_with_args(
                "manifest-generated",
                &[("path", path.as_str()), ("count", count.as_str())],
            )
        );
    }
    let total = summary.total.to_string();
    println!(
        "{}",
        i18n.tr_with_args("manifest-total", &[("count", total.as_str())])
    );

    if watch {
        println!("{}", i18n.tr("manifest-watching"));
        manifest::watch(&root, &folders, config.watch_interval(), |change| {
            println!(
                "{}",
                i18n.tr_with_args("manifest-change-detected", &[("folder", change.folder.as_str())])
            );
        })
        .await?;
    }
    Ok(())
}

/// Discovers images from an HTTP server or a local directory, depending on
/// `base`. Folders skipped for a bad manifest are reported on stderr.
async fn discover_images(
    config: &Config,
    base: &str,
    folders: &[FolderSpec],
    i18n: &I18n,
) -> Result<Vec<ImageRecord>> {
    let options = ScanOptions {
        base,
        extensions: &config.scan.extensions,
        threshold: config.miss_threshold(),
    };
    let mode = config.scan.discovery;
    let parallel = config.scan.parallel_folders;

    let discovery = if HttpAssets::handles(base) {
        let assets = HttpAssets::new(config.probe_timeout())?;
        gallery::discover(&assets, mode, folders, options, parallel).await
    } else {
        gallery::discover(&FsAssets::new(), mode, folders, options, parallel).await
    };

    for skipped in &discovery.skipped {
        let reason = i18n.tr(skipped.error.i18n_key());
        eprintln!(
            "{}",
            i18n.tr_with_args(
                "manifest-folder-skipped",
                &[("folder", skipped.folder.as_str()), ("reason", reason.as_str())],
            )
        );
    }
    Ok(discovery.images)
}
