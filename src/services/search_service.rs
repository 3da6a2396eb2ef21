// Search service - resolves aliases and request parameters to search URLs

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::{
    config::services::ServicesConfig,
    domain::{content_type, Description, ParamValue, SearchParams},
    error::AppError,
    services::document_loader::load_document,
};

/// Query parameter carrying the requested content type
pub const CONTENT_TYPE_PARAM: &str = "contentType";
/// Parameter the free text of `/search?q=` is bound to
pub const SEARCH_TERMS_PARAM: &str = "searchTerms";

/// A description registered under an alias
#[derive(Debug, Clone)]
pub struct RegisteredService {
    pub alias: String,
    pub description: String,
    pub default_content_type: Option<String>,
    pub osdd: Arc<Description>,
}

impl RegisteredService {
    pub fn new(alias: &str, description: &str, osdd: Description) -> Self {
        Self {
            alias: alias.to_string(),
            description: description.to_string(),
            default_content_type: None,
            osdd: Arc::new(osdd),
        }
    }

    pub fn with_default_content_type(mut self, content_type: &str) -> Self {
        self.default_content_type = Some(content_type.to_string());
        self
    }

    /// Requested type, else the configured default, else `*/*`
    pub fn effective_content_type<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .or(self.default_content_type.as_deref())
            .unwrap_or(content_type::ANY)
    }
}

/// A resolved search URL
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub alias: String,
    pub content_type: String,
    pub url: String,
}

/// Service for resolving search requests against registered descriptions
#[derive(Debug)]
pub struct SearchService {
    services: HashMap<String, RegisteredService>,
    default_alias: String,
}

impl SearchService {
    pub fn new(default_alias: &str) -> Self {
        Self {
            services: HashMap::new(),
            default_alias: default_alias.to_string(),
        }
    }

    /// Load every description named in the services file
    pub async fn from_config(config: &ServicesConfig, default_alias: &str) -> Result<Self> {
        let mut service = Self::new(default_alias);

        for settings in &config.services {
            let source = config.document_source(settings);
            let document = load_document(&source).await?;
            let osdd = Description::new(document)
                .with_context(|| format!("Invalid description for '{}'", settings.alias))?;

            info!(
                alias = %settings.alias,
                source = %source,
                templates = osdd.templates().map_or(0, |t| t.len()),
                "registered search service"
            );

            let mut registered = RegisteredService::new(&settings.alias, &settings.description, osdd);
            registered.default_content_type = settings.content_type.clone();
            service.register(registered)?;
        }

        Ok(service)
    }

    pub fn register(&mut self, service: RegisteredService) -> Result<()> {
        if self.services.contains_key(&service.alias) {
            bail!("Duplicate alias: {}", service.alias);
        }
        self.services.insert(service.alias.clone(), service);
        Ok(())
    }

    pub fn get(&self, alias: &str) -> Option<&RegisteredService> {
        self.services.get(alias)
    }

    pub fn default_alias(&self) -> &str {
        &self.default_alias
    }

    /// Registered services sorted by alias
    pub fn services(&self) -> Vec<&RegisteredService> {
        let mut services: Vec<_> = self.services.values().collect();
        services.sort_by(|a, b| a.alias.cmp(&b.alias));
        services
    }

    pub fn resolve(
        &self,
        alias: &str,
        content_type: Option<&str>,
        params: &SearchParams,
    ) -> Result<Resolved, AppError> {
        let service = self
            .get(alias)
            .ok_or_else(|| AppError::NotFound(format!("No search service named '{}'", alias)))?;

        let content_type = service.effective_content_type(content_type);
        let url = service.osdd.resolve(params, content_type)?;

        Ok(Resolved {
            alias: service.alias.clone(),
            content_type: content_type.to_string(),
            url,
        })
    }

    /// Resolve `"<alias> <terms>"`. An unknown alias sends the whole input to
    /// the default alias.
    pub fn resolve_query(
        &self,
        q: &str,
        content_type: Option<&str>,
        mut params: SearchParams,
    ) -> Result<Resolved, AppError> {
        let (alias, terms) = Self::split_alias(q);

        let (alias, terms) = if self.services.contains_key(alias) {
            (alias, terms)
        } else {
            (self.default_alias.as_str(), q.trim())
        };

        if !terms.is_empty() {
            params.insert(SEARCH_TERMS_PARAM, urlencoding::encode(terms).into_owned());
        }

        self.resolve(alias, content_type, &params)
    }

    /// Split the first word off as the alias
    pub fn split_alias(q: &str) -> (&str, &str) {
        let mut splitted = q.trim().splitn(2, ' ');
        let alias = splitted.next().unwrap_or("");
        let terms = splitted.next().unwrap_or_default().trim();
        (alias, terms)
    }

    /// Split raw query-string pairs into the requested content type and
    /// percent-encoded search parameters. Names in `reserved` are dropped.
    pub fn search_params_from_query(
        query: HashMap<String, String>,
        reserved: &[&str],
    ) -> (Option<String>, SearchParams) {
        let mut content_type = None;
        let mut params = SearchParams::new();

        for (name, value) in query {
            if name == CONTENT_TYPE_PARAM {
                content_type = Some(value);
            } else if !reserved.contains(&name.as_str()) {
                let value = ParamValue::Text(urlencoding::encode(&value).into_owned());
                params.insert(name, value);
            }
        }

        (content_type, params)
    }
}
