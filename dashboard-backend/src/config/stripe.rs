use std::env;

/// 接続アカウントごとの決済データ取得に使うStripe設定
#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub secret_key: String,
    pub development_mode: bool,
}

impl StripeConfig {
    pub fn from_env() -> Result<Self, String> {
        let development_mode = env::var("PAYMENT_DEVELOPMENT_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        if development_mode {
            tracing::info!("Payment development mode enabled - using in-memory billing data");
            return Ok(Self::development());
        }

        let secret_key = env::var("STRIPE_SECRET_KEY")
            .map_err(|_| "STRIPE_SECRET_KEY must be set when not in development mode")?;

        // 公開可能キーはサーバー側の読み取りには使えない
        if secret_key.starts_with("pk_") {
            tracing::error!("STRIPE_SECRET_KEY is a publishable key, expected a secret key");
            return Err("Invalid STRIPE_SECRET_KEY: use a secret key (sk_...)".to_string());
        }

        Ok(Self {
            secret_key,
            development_mode: false,
        })
    }

    pub fn development() -> Self {
        Self {
            secret_key: String::new(),
            development_mode: true,
        }
    }

    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_") || self.development_mode
    }
}
