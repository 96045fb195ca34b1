#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

    use crate::data::PrefetchRequest;
    use crate::effects::environment::{Environment, FetchTransport, Unsupported, XhrTransport};
    use crate::error::{PrefetchError, Result};

    /// Options for building a [`NativeEnvironment`].
    #[derive(Debug, Clone)]
    pub struct NativeOptions {
        pub user_agent: Option<String>,
        pub headers: Vec<(String, String)>,
        /// Expose a fetch transport so high-priority requests take the fetch path.
        pub fetch: bool,
    }

    impl Default for NativeOptions {
        fn default() -> Self {
            Self {
                user_agent: None,
                headers: Vec::new(),
                fetch: true,
            }
        }
    }

    impl NativeOptions {
        #[must_use]
        pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
            self.user_agent = Some(user_agent.into());
            self
        }

        #[must_use]
        pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.headers.push((key.into(), value.into()));
            self
        }

        #[must_use]
        pub fn fetch(mut self, fetch: bool) -> Self {
            self.fetch = fetch;
            self
        }
    }

    /// Shared `reqwest` client used as both the XHR and fetch transport.
    ///
    /// The client keeps a cookie store, so every request carries whatever
    /// cookies earlier responses set. Strategies only issue credentialed
    /// requests; `Credentials::Omit` is for transports that can honour it.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        fn new(options: &NativeOptions) -> Result<Self> {
            Ok(Self {
                client: build_client(options, header_map(&options.headers)?)?,
            })
        }

        /// GET the URL and drain the body so the response is fully loaded.
        ///
        /// Chunks are dropped as they arrive; the body is never buffered.
        async fn get(&self, request: &PrefetchRequest) -> Result<u16> {
            let mut response = self.client.get(&request.url).send().await?;
            let status = response.status().as_u16();
            while response.chunk().await?.is_some() {}
            Ok(status)
        }
    }

    impl XhrTransport for ReqwestTransport {
        async fn send(&self, request: &PrefetchRequest) -> Result<u16> {
            self.get(request).await
        }
    }

    impl FetchTransport for ReqwestTransport {
        async fn fetch(&self, request: &PrefetchRequest) -> Result<u16> {
            self.get(request).await
        }
    }

    fn build_client(options: &NativeOptions, headers: HeaderMap) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers);
        if let Some(ref user_agent) = options.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        builder
            .build()
            .map_err(|e| PrefetchError::Client(e.to_string()))
    }

    fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| PrefetchError::Client(format!("invalid header name {key:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| PrefetchError::Client(format!("invalid value for {key}: {e}")))?;
            map.append(name, value);
        }
        Ok(map)
    }

    /// Host environment for native processes.
    ///
    /// There is no document, so the standard strategy is always XHR.
    /// High-priority requests use the fetch transport unless it was
    /// disabled in [`NativeOptions`].
    #[derive(Debug, Clone)]
    pub struct NativeEnvironment {
        transport: ReqwestTransport,
        fetch: bool,
    }

    impl NativeEnvironment {
        pub fn new() -> Result<Self> {
            Self::with_options(NativeOptions::default())
        }

        pub fn with_options(options: NativeOptions) -> Result<Self> {
            Ok(Self {
                transport: ReqwestTransport::new(&options)?,
                fetch: options.fetch,
            })
        }
    }

    impl Environment for NativeEnvironment {
        type Document = Unsupported;
        type Xhr = ReqwestTransport;
        type Fetch = ReqwestTransport;

        fn document(&self) -> Option<&Self::Document> {
            None
        }

        fn xhr(&self) -> &Self::Xhr {
            &self.transport
        }

        fn fetch(&self) -> Option<&Self::Fetch> {
            self.fetch.then_some(&self.transport)
        }
    }

}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::{NativeEnvironment, NativeOptions, ReqwestTransport};
