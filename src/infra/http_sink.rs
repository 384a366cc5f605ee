use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

use crate::app::ports::VendorSinkPort;
use crate::config::ApiConfig;
use crate::domain::VendorRecord;
use crate::error::{ImportError, Result};

/// Posts each vendor as JSON to the vendor creation endpoint.
///
/// One attempt per vendor; any non-2xx status is reported as a failure.
pub struct HttpVendorSink {
    client: reqwest::Client,
    url: String,
}

impl HttpVendorSink {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let url = api.create_vendor_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VendorSinkPort for HttpVendorSink {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn deliver(&self, vendor: &VendorRecord) -> Result<()> {
        let resp = self.client.post(&self.url).json(vendor).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(vendor = %vendor.name, status = status.as_u16(), "Vendor creation rejected");
            return Err(ImportError::Api {
                status: status.as_u16(),
                message: if message.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown status").to_string()
                } else {
                    message
                },
            });
        }

        info!(vendor = %vendor.name, status = status.as_u16(), "Created vendor");
        println!("Created vendor: {} ({})", vendor.name, vendor.email);
        Ok(())
    }
}
