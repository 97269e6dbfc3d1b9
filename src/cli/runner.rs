//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::models::{
    ApiCallStatus, CreatedAtSortMode, FileExportFormat, FileImportFormat, ListParams,
};
use crate::pagination::{AsyncPageIterator, AsyncPageSource};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Delay between conversion status checks
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::new(self.client_config()?)?;

        match &self.cli.command {
            Commands::Whoami => self.whoami(&client).await,
            Commands::ApiCalls {
                limit,
                sort_by,
                max_items,
            } => self.api_calls(&client, *limit, *sort_by, *max_items).await,
            Commands::ApiTokens { limit } => self.api_tokens(&client, *limit).await,
            Commands::Users { limit, max_items } => self.users(&client, *limit, *max_items).await,
            Commands::Convert {
                input,
                from,
                to,
                output_dir,
            } => self.convert(&client, input, *from, *to, output_dir).await,
        }
    }

    /// Build the client config: file or environment first, then flags
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_yaml_file(path)?,
            None => ClientConfig::from_env(),
        };

        if let Some(host) = &self.cli.host {
            config.host.clone_from(host);
        }
        if let Some(token) = &self.cli.token {
            config.token = Some(token.clone());
        }

        debug!("Using API host {}", config.host);
        Ok(config)
    }

    async fn whoami(&self, client: &Client) -> Result<()> {
        let user = client.users().me().await?;
        info!("Authenticated as {}", user.display_name());
        self.emit(&user)
    }

    async fn api_calls(
        &self,
        client: &Client,
        limit: Option<u32>,
        sort_by: Option<CreatedAtSortMode>,
        max_items: Option<usize>,
    ) -> Result<()> {
        let mut params = ListParams::new();
        params.limit = limit;
        params.sort_by = sort_by;

        let pager = client.api_calls().list(params);
        self.emit_items(&pager, max_items).await
    }

    async fn api_tokens(&self, client: &Client, limit: Option<u32>) -> Result<()> {
        let params = ListParams {
            limit,
            ..ListParams::default()
        };

        let pager = client.api_tokens().list(params);
        self.emit_items(&pager, None).await
    }

    async fn users(
        &self,
        client: &Client,
        limit: Option<u32>,
        max_items: Option<usize>,
    ) -> Result<()> {
        let params = ListParams {
            limit,
            ..ListParams::default()
        };

        let pager = client.users().list(params);
        self.emit_items(&pager, max_items).await
    }

    async fn convert(
        &self,
        client: &Client,
        input: &Path,
        from: Option<FileImportFormat>,
        to: FileExportFormat,
        output_dir: &Path,
    ) -> Result<()> {
        let src_format = match from {
            Some(format) => format,
            None => FileImportFormat::from_path(input).ok_or_else(|| {
                Error::config(format!(
                    "Cannot infer input format of {}; pass --from",
                    input.display()
                ))
            })?,
        };

        let body = tokio::fs::read(input)
            .await
            .with_context(|| format!("Failed to read {}", input.display()))?;

        let mut conversion = client.file().create_conversion(src_format, to, body).await?;
        info!("Started conversion {}", conversion.id);

        while !conversion.status.is_finished() {
            debug!("Conversion {} is {:?}", conversion.id, conversion.status);
            tokio::time::sleep(POLL_INTERVAL).await;
            conversion = client.file().get_conversion(&conversion.id).await?;
        }

        if conversion.status == ApiCallStatus::Failed {
            return Err(Error::Other(format!(
                "Conversion {} failed: {}",
                conversion.id,
                conversion.error.as_deref().unwrap_or("no reason given")
            )));
        }

        tokio::fs::create_dir_all(output_dir).await?;

        let mut written = Vec::new();
        for (name, bytes) in conversion.decoded_outputs()? {
            // Output names come from the server; keep only the file name.
            let file_name = Path::new(&name)
                .file_name()
                .ok_or_else(|| Error::decode(format!("Invalid output file name '{name}'")))?;
            let path = output_dir.join(file_name);
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), bytes.len());
            written.push(path.display().to_string());
        }

        self.emit(&json!({
            "id": conversion.id,
            "status": conversion.status,
            "files": written,
        }))
    }

    /// Print every item of a paginated list, one per line.
    ///
    /// With `max_items` the stream is cut short, so no further pages are
    /// requested once enough items have been printed.
    async fn emit_items<T, S>(
        &self,
        pager: &AsyncPageIterator<T, S>,
        max_items: Option<usize>,
    ) -> Result<()>
    where
        T: Serialize,
        S: AsyncPageSource<T, Error = Error>,
    {
        let stream = pager.stream().take(max_items.unwrap_or(usize::MAX));
        let mut stream = std::pin::pin!(stream);

        let mut count = 0usize;
        while let Some(item) = stream.try_next().await? {
            self.emit(&item)?;
            count += 1;
        }

        info!("Listed {} items", count);
        Ok(())
    }

    /// Output a value in the selected format
    fn emit<V: Serialize + ?Sized>(&self, value: &V) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{line}");
        Ok(())
    }
}
