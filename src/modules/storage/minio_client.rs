//! MinIO/S3-compatible storage client.
//!
//! Uses rust-s3 for object operations. Photos live under a single prefix
//! that is made publicly readable at startup so stored URLs can be opened
//! directly by the mobile and web clients.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Client, Url};
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use super::{ObjectStorage, StorageError};
use crate::core::config::MinIOConfig;

type HmacSha256 = Hmac<Sha256>;

pub struct MinIOClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    endpoint: String,
    public_endpoint: String,
    photo_prefix: String,
    access_key: String,
    secret_key: String,
    region_name: String,
    http_client: Client,
}

impl MinIOClient {
    /// Create the client, make sure the bucket exists and open the photo
    /// prefix for anonymous reads.
    pub async fn new(config: MinIOConfig) -> Result<Self, StorageError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Config(format!("Invalid MinIO credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| StorageError::Config(format!("Invalid MinIO bucket: {}", e)))?;

        // Path-style URLs for MinIO (http://endpoint/bucket)
        bucket.set_path_style();

        let http_client = Client::builder()
            .build()
            .map_err(|e| StorageError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let client = Self {
            bucket,
            region,
            credentials,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
            photo_prefix: config.photo_prefix.trim_matches('/').to_string(),
            access_key: config.access_key,
            secret_key: config.secret_key,
            region_name: config.region,
            http_client,
        };

        client.ensure_bucket_exists().await;
        client.set_public_read_policy().await;

        info!(
            "MinIO client initialized for endpoint: {}, bucket: {}, photo_prefix: {}",
            client.endpoint,
            client.bucket.name(),
            client.photo_prefix
        );

        Ok(client)
    }

    async fn ensure_bucket_exists(&self) {
        let result = Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await;

        match result {
            Ok(_) => info!("Bucket '{}' created", self.bucket.name()),
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                }
            }
        }
    }

    /// Allow anonymous `s3:GetObject` on `{bucket}/{photo_prefix}/*`
    async fn set_public_read_policy(&self) {
        let bucket_name = self.bucket.name();
        let policy = json!({
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Effect": "Allow",
                    "Principal": {"AWS": "*"},
                    "Action": ["s3:GetObject"],
                    "Resource": [format!("arn:aws:s3:::{}/{}/*", bucket_name, self.photo_prefix)]
                }
            ]
        })
        .to_string();

        match self.put_bucket_policy(&bucket_name, &policy).await {
            Ok(()) => info!(
                "Set public read policy for {}/{}/*",
                bucket_name, self.photo_prefix
            ),
            Err(e) => warn!(
                "Failed to set bucket policy for '{}': {}. \
                Set it manually with: mc anonymous set download minio/{}/{}",
                bucket_name, e, bucket_name, self.photo_prefix
            ),
        }
    }

    /// PUT ?policy signed with AWS Signature v4
    async fn put_bucket_policy(&self, bucket_name: &str, policy: &str) -> Result<(), StorageError> {
        let now = Utc::now();
        let date_stamp = now.format("%Y%m%d").to_string();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();

        let endpoint_url = Url::parse(&self.endpoint)
            .map_err(|e| StorageError::Config(format!("Invalid endpoint URL: {}", e)))?;
        let host = endpoint_url
            .host_str()
            .ok_or_else(|| StorageError::Config("Endpoint URL has no host".to_string()))?;
        let host_header = match endpoint_url.port() {
            Some(p) => format!("{}:{}", host, p),
            None => host.to_string(),
        };

        let url = format!("{}/{}?policy", self.endpoint, bucket_name);
        let payload_hash = hex::encode(Sha256::digest(policy.as_bytes()));

        let canonical_headers = format!(
            "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
            host_header, payload_hash, amz_date
        );
        let signed_headers = "host;x-amz-content-sha256;x-amz-date";
        let canonical_request = format!(
            "PUT\n/{}\npolicy=\n{}\n{}\n{}",
            bucket_name, canonical_headers, signed_headers, payload_hash
        );

        let algorithm = "AWS4-HMAC-SHA256";
        let credential_scope = format!("{}/{}/s3/aws4_request", date_stamp, self.region_name);
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            algorithm,
            amz_date,
            credential_scope,
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let signature = self.signature(&date_stamp, &string_to_sign)?;
        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            algorithm, self.access_key, credential_scope, signed_headers, signature
        );

        let response = self
            .http_client
            .put(&url)
            .header("Host", &host_header)
            .header("x-amz-date", &amz_date)
            .header("x-amz-content-sha256", &payload_hash)
            .header("Authorization", &authorization)
            .header("Content-Type", "application/json")
            .body(policy.to_string())
            .send()
            .await
            .map_err(|e| StorageError::Config(format!("Policy request failed: {}", e)))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(StorageError::Config(format!(
            "Failed to set bucket policy: {} - {}",
            status, body
        )))
    }

    fn signature(&self, date_stamp: &str, string_to_sign: &str) -> Result<String, StorageError> {
        let k_date = hmac_sha256(
            format!("AWS4{}", self.secret_key).as_bytes(),
            date_stamp.as_bytes(),
        )?;
        let k_region = hmac_sha256(&k_date, self.region_name.as_bytes())?;
        let k_service = hmac_sha256(&k_region, b"s3")?;
        let k_signing = hmac_sha256(&k_service, b"aws4_request")?;
        Ok(hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes())?))
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, StorageError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| StorageError::Config(format!("HMAC key error: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[async_trait]
impl ObjectStorage for MinIOClient {
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        if response.status_code() >= 300 {
            return Err(StorageError::Upload {
                key: key.to_string(),
                reason: format!("status {}", response.status_code()),
            });
        }

        debug!("Uploaded '{}' to bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .delete_object(key)
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        if response.status_code() >= 300 {
            return Err(StorageError::Delete {
                key: key.to_string(),
                reason: format!("status {}", response.status_code()),
            });
        }

        debug!("Deleted '{}' from bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    fn photo_prefix(&self) -> &str {
        &self.photo_prefix
    }
}
