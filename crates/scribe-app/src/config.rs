use std::str::FromStr;

use scribe_common::{ApiId, ClientConfig, CurrentUser};
use scribe_composer::ImageLimits;
use smol_str::SmolStr;

use crate::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub app_name: SmolStr,
    pub api: ClientConfig,
    pub images: ImageLimits,
    /// Signed-in user assumed in dev builds when nothing is stored locally
    pub dev_user: Option<CurrentUser>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(&EnvValues {
            app_env: env::SCRIBE_APP_ENV,
            app_name: env::SCRIBE_APP_NAME,
            api_base: env::SCRIBE_API_BASE,
            posts_path: env::SCRIBE_POSTS_PATH,
            max_image_bytes: env::SCRIBE_MAX_IMAGE_BYTES,
            dev_user_id: env::SCRIBE_DEV_USER_ID,
        })
    }

    fn from_values(values: &EnvValues<'_>) -> Self {
        let app_env = AppEnv::from_str(values.app_env).unwrap_or_else(|e| {
            if !values.app_env.is_empty() {
                tracing::warn!("{e}, falling back to dev");
            }
            AppEnv::Dev
        });

        let mut api = if values.api_base.is_empty() {
            ClientConfig::default()
        } else {
            ClientConfig::new(values.api_base)
        };
        if !values.posts_path.is_empty() {
            api = api.with_posts_path(values.posts_path);
        }

        let images = match values.max_image_bytes.parse::<usize>() {
            Ok(max_bytes) if max_bytes > 0 => ImageLimits { max_bytes },
            _ => ImageLimits::default(),
        };

        let dev_user = match app_env {
            AppEnv::Dev if !values.dev_user_id.is_empty() => {
                let id = values
                    .dev_user_id
                    .parse::<u64>()
                    .map(ApiId::Numeric)
                    .unwrap_or_else(|_| ApiId::from(values.dev_user_id));
                Some(CurrentUser::new(id))
            }
            _ => None,
        };

        Self {
            env: app_env,
            app_name: if values.app_name.is_empty() {
                SmolStr::new_static("Scribe")
            } else {
                SmolStr::new(values.app_name)
            },
            api,
            images,
            dev_user,
        }
    }
}

struct EnvValues<'a> {
    app_env: &'a str,
    app_name: &'a str,
    api_base: &'a str,
    posts_path: &'a str,
    max_image_bytes: &'a str,
    dev_user_id: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Dev,
    Prod,
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid AppEnv: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>() -> EnvValues<'a> {
        EnvValues {
            app_env: "",
            app_name: "",
            api_base: "",
            posts_path: "",
            max_image_bytes: "",
            dev_user_id: "",
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_values(&values());
        assert_eq!(config.env, AppEnv::Dev);
        assert_eq!(config.app_name, "Scribe");
        assert_eq!(config.images, ImageLimits::default());
        assert_eq!(
            config.api.posts_url().unwrap().as_str(),
            "http://localhost:8000/api/posts/"
        );
        assert!(config.dev_user.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_values(&EnvValues {
            app_env: "dev",
            app_name: "Inkwell",
            api_base: "https://blog.example.com/api/v2/",
            posts_path: "articles/",
            max_image_bytes: "1024",
            dev_user_id: "17",
        });
        assert_eq!(config.app_name, "Inkwell");
        assert_eq!(config.images.max_bytes, 1024);
        assert_eq!(
            config.api.posts_url().unwrap().as_str(),
            "https://blog.example.com/api/v2/articles/"
        );
        assert_eq!(config.dev_user.unwrap().id, ApiId::Numeric(17));
    }

    #[test]
    fn test_prod_ignores_dev_user_and_bad_limits() {
        let config = Config::from_values(&EnvValues {
            app_env: "prod",
            max_image_bytes: "lots",
            dev_user_id: "17",
            ..values()
        });
        assert_eq!(config.env, AppEnv::Prod);
        assert!(config.dev_user.is_none());
        assert_eq!(config.images, ImageLimits::default());
    }

    #[test]
    fn test_app_env_parse() {
        assert_eq!("prod".parse::<AppEnv>(), Ok(AppEnv::Prod));
        assert!("staging".parse::<AppEnv>().is_err());
    }
}
