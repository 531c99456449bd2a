use clap::Parser;
use vendaa_cms::config::ResolvedConfig;
use vendaa_cms::core::catalogue;
use vendaa_cms::core::contact::{ContactMessage, ContactOutcome, ContactRelay};
use vendaa_cms::core::session::{self, AdminGate, GateState, ADMIN_ROUTE};
use vendaa_cms::domain::model::{CatalogItem, CollectionKind, SettingsPatch};
use vendaa_cms::domain::ports::{IdentityProvider, ImageField};
use vendaa_cms::utils::{logger, validation};
use vendaa_cms::{CmsConfig, Command, ContentStore, LocalSnapshots, RemoteSync, RestBackend, RestIdentity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CmsConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vendaa-cms");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let resolved = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let storage = LocalSnapshots::new(resolved.data_dir.clone());
    let mut store = match &resolved.remote {
        Some(remote) => ContentStore::with_remote(
            storage.clone(),
            RestBackend::new(&remote.url, &remote.api_key),
        ),
        None => ContentStore::local_only(storage.clone()),
    };
    store.load().await;

    match run(config.command, &resolved, &storage, &mut store).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(
    command: Command,
    resolved: &ResolvedConfig,
    storage: &LocalSnapshots,
    store: &mut ContentStore<LocalSnapshots, RestBackend>,
) -> anyhow::Result<()> {
    match command {
        Command::List { category, query } => {
            let results = catalogue::filter_items(store.items(), &category, &query);
            if results.is_empty() {
                println!("No products found.");
                return Ok(());
            }
            for item in &results {
                println!(
                    "{:<24} {:<32} From {:>10}  [{}]",
                    item.id,
                    item.name,
                    store.format_price(item.price_from),
                    item.category
                );
            }
            println!("{} of {} products shown", results.len(), store.items().len());
        }

        Command::Show { id } => {
            let item = store
                .items()
                .iter()
                .find(|i| i.id == id)
                .ok_or_else(|| anyhow::anyhow!("No item with id {}", id))?;
            println!("{} ({})", item.name, item.id);
            println!("  Category:    {}", item.category);
            println!("  From:        {}", store.format_price(item.price_from));
            println!("  Description: {}", item.description);
            if !item.branding_options.is_empty() {
                println!("  Branding:    {}", item.branding_options.join(", "));
            }
            for tier in &item.pricing_tiers {
                println!(
                    "  Tier {:<12} {:<16} {}",
                    tier.name,
                    tier.quantity,
                    store.format_price(tier.price)
                );
            }
        }

        Command::UpsertItem { file } => {
            ensure_admin(resolved, storage).await?;
            let raw = std::fs::read_to_string(&file)?;
            let item: CatalogItem = serde_json::from_str(&raw)?;
            let id = item.id.clone();
            let sync = store.upsert_item(item).await?;
            println!("✅ Item {} saved", id);
            report_sync(&sync);
        }

        Command::Delete { kind, id } => {
            ensure_admin(resolved, storage).await?;
            let kind: CollectionKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let sync = match kind {
                CollectionKind::Items => {
                    anyhow::ensure!(
                        store.items().iter().any(|i| i.id == id),
                        "No item with id {}",
                        id
                    );
                    store.delete_item(&id).await
                }
                CollectionKind::Testimonials => {
                    anyhow::ensure!(
                        store.testimonials().iter().any(|t| t.id == id),
                        "No testimonial with id {}",
                        id
                    );
                    store.delete_testimonial(&id).await
                }
                CollectionKind::CaseStudies => {
                    anyhow::ensure!(
                        store.case_studies().iter().any(|c| c.id == id),
                        "No case study with id {}",
                        id
                    );
                    store.delete_case_study(&id).await
                }
                CollectionKind::Settings => {
                    anyhow::bail!("Settings cannot be deleted; use set-currency to update them")
                }
            };
            println!("✅ Deleted {} from {}", id, kind.as_str());
            report_sync(&sync);
        }

        Command::SetCurrency { code, symbol } => {
            ensure_admin(resolved, storage).await?;
            validation::validate_currency_code("currency code", &code)?;
            let sync = store
                .update_settings(SettingsPatch {
                    currency_code: Some(code.to_uppercase()),
                    currency_symbol: Some(symbol),
                    hero_image: None,
                })
                .await;
            println!(
                "✅ Currency set to {} ({})",
                store.settings().currency_code,
                store.settings().symbol()
            );
            report_sync(&sync);
        }

        Command::UploadImage { id, field, path } => {
            ensure_admin(resolved, storage).await?;
            let field: ImageField = field
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let bytes = std::fs::read(&path)?;
            let sync = store.upload_item_image(&id, field, &path, bytes).await?;
            let item = store.items().iter().find(|i| i.id == id);
            let reference = item
                .map(|i| match field {
                    ImageField::Image => i.image.clone(),
                    ImageField::BeforeImage => i.before_image.clone().unwrap_or_default(),
                    ImageField::AfterImage => i.after_image.clone().unwrap_or_default(),
                })
                .unwrap_or_default();
            println!("✅ Image uploaded: {}", reference);
            report_sync(&sync);
        }

        Command::Login { email, password } => {
            let Some(remote) = &resolved.remote else {
                anyhow::bail!("Login requires a configured remote backend");
            };
            let password = match password {
                Some(p) => p,
                None => std::env::var("VENDAA_ADMIN_PASSWORD").map_err(|_| {
                    anyhow::anyhow!("Provide --password or set VENDAA_ADMIN_PASSWORD")
                })?,
            };
            let identity = RestIdentity::new(&remote.url, &remote.api_key);
            let new_session = identity.sign_in(&email, &password).await?;
            session::save_session(storage, &new_session).await;
            println!("✅ Signed in as {}", new_session.email);
        }

        Command::Logout => {
            if let (Some(remote), Some(current)) =
                (&resolved.remote, session::load_session(storage).await)
            {
                let identity = RestIdentity::new(&remote.url, &remote.api_key);
                if let Err(e) = identity.sign_out(&current).await {
                    tracing::warn!("Provider sign-out failed: {}", e);
                }
            }
            session::clear_session(storage).await;
            println!("✅ Signed out");
        }

        Command::Status => {
            let current = session::load_session(storage).await;
            let gate = AdminGate::at_load(ADMIN_ROUTE, current.as_ref());
            let mode = if store.is_remote() { "remote" } else { "local" };
            println!("Mode:  {}", mode);
            match gate.state() {
                GateState::Authenticated => {
                    let email = current.map(|s| s.email).unwrap_or_default();
                    println!("Admin: authenticated as {}", email);
                }
                GateState::LoginRequired => println!("Admin: login required"),
                GateState::Public => println!("Admin: public"),
            }
            println!(
                "Content: {} items, {} testimonials, {} case studies",
                store.items().len(),
                store.testimonials().len(),
                store.case_studies().len()
            );
        }

        Command::Contact {
            name,
            email,
            company,
            message,
        } => {
            let relay = ContactRelay::new(resolved.relay_endpoint.clone());
            let msg = ContactMessage::new(name, email, company, message);
            match relay.submit(&msg).await? {
                ContactOutcome::Relayed => {
                    println!("✅ Message sent successfully! We'll be in touch soon.")
                }
                ContactOutcome::MailtoDraft(draft) => {
                    println!("No relay configured. Send the message with this draft:");
                    println!("{}", draft);
                }
            }
        }
    }

    Ok(())
}

/// Admin mutations behind a configured remote require a valid session;
/// local mode has no identity provider to delegate to and stays open.
async fn ensure_admin(resolved: &ResolvedConfig, storage: &LocalSnapshots) -> anyhow::Result<()> {
    if resolved.remote.is_none() {
        return Ok(());
    }
    let current = session::load_session(storage).await;
    let gate = AdminGate::at_load(ADMIN_ROUTE, current.as_ref());
    anyhow::ensure!(
        gate.is_authenticated(),
        "Admin session required; run `vendaa-cms login --email <you>`"
    );
    Ok(())
}

fn report_sync(sync: &RemoteSync) {
    match sync {
        RemoteSync::Skipped => {}
        RemoteSync::Synced => tracing::info!("Remote backend updated"),
        RemoteSync::Failed(err) => {
            println!("⚠️  Saved locally; remote sync failed: {}", err);
        }
    }
}
