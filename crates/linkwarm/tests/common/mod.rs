//! In-memory environment for driving the prefetcher without a network.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use linkwarm::{
    Document, Environment, FetchTransport, InsertionPoint, LinkElement, PrefetchError,
    PrefetchRequest, RelSupport, Result, XhrTransport,
};

#[derive(Debug, Default)]
pub struct Calls {
    pub links: Mutex<Vec<(InsertionPoint, LinkElement)>>,
    pub xhr: Mutex<Vec<PrefetchRequest>>,
    pub fetch: Mutex<Vec<PrefetchRequest>>,
}

impl Calls {
    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn xhr_count(&self) -> usize {
        self.xhr.lock().unwrap().len()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch.lock().unwrap().len()
    }

    pub fn total(&self) -> usize {
        self.link_count() + self.xhr_count() + self.fetch_count()
    }
}

pub struct FakeDocument {
    pub support: RelSupport,
    pub head: bool,
    pub script: bool,
    pub load_fails: bool,
    calls: Arc<Calls>,
}

impl Document for FakeDocument {
    fn supports_rel(&self, rel: &str) -> RelSupport {
        assert_eq!(rel, "prefetch");
        self.support.clone()
    }

    fn has_head(&self) -> bool {
        self.head
    }

    fn has_script(&self) -> bool {
        self.script
    }

    async fn append_link(&self, point: InsertionPoint, link: LinkElement) -> Result<()> {
        let href = link.href.clone();
        self.calls.links.lock().unwrap().push((point, link));
        if self.load_fails {
            Err(PrefetchError::LinkLoad(href))
        } else {
            Ok(())
        }
    }
}

pub struct FakeXhr {
    pub status: u16,
    calls: Arc<Calls>,
}

impl XhrTransport for FakeXhr {
    async fn send(&self, request: &PrefetchRequest) -> Result<u16> {
        self.calls.xhr.lock().unwrap().push(request.clone());
        Ok(self.status)
    }
}

pub struct FakeFetch {
    pub status: u16,
    pub unreachable: bool,
    calls: Arc<Calls>,
}

impl FetchTransport for FakeFetch {
    async fn fetch(&self, request: &PrefetchRequest) -> Result<u16> {
        self.calls.fetch.lock().unwrap().push(request.clone());
        if self.unreachable {
            Err(PrefetchError::Transport("connection refused".into()))
        } else {
            Ok(self.status)
        }
    }
}

pub struct FakeEnv {
    pub document: Option<FakeDocument>,
    pub xhr: FakeXhr,
    pub fetch: Option<FakeFetch>,
    pub calls: Arc<Calls>,
}

impl FakeEnv {
    /// Browser-like: document with a head that supports prefetch, fetch present.
    pub fn browser() -> Self {
        let calls = Arc::new(Calls::default());
        Self {
            document: Some(FakeDocument {
                support: Ok(Some(true)),
                head: true,
                script: true,
                load_fails: false,
                calls: calls.clone(),
            }),
            xhr: FakeXhr {
                status: 200,
                calls: calls.clone(),
            },
            fetch: Some(FakeFetch {
                status: 200,
                unreachable: false,
                calls: calls.clone(),
            }),
            calls,
        }
    }

    /// No document, no fetch: only XHR.
    pub fn xhr_only() -> Self {
        let mut env = Self::browser();
        env.document = None;
        env.fetch = None;
        env
    }

    pub fn without_document(mut self) -> Self {
        self.document = None;
        self
    }

    pub fn without_fetch(mut self) -> Self {
        self.fetch = None;
        self
    }

    pub fn support(mut self, support: RelSupport) -> Self {
        if let Some(ref mut document) = self.document {
            document.support = support;
        }
        self
    }

    pub fn layout(mut self, head: bool, script: bool) -> Self {
        if let Some(ref mut document) = self.document {
            document.head = head;
            document.script = script;
        }
        self
    }

    pub fn link_load_fails(mut self) -> Self {
        if let Some(ref mut document) = self.document {
            document.load_fails = true;
        }
        self
    }

    pub fn xhr_status(mut self, status: u16) -> Self {
        self.xhr.status = status;
        self
    }

    pub fn fetch_status(mut self, status: u16) -> Self {
        if let Some(ref mut fetch) = self.fetch {
            fetch.status = status;
        }
        self
    }

    pub fn fetch_unreachable(mut self) -> Self {
        if let Some(ref mut fetch) = self.fetch {
            fetch.unreachable = true;
        }
        self
    }
}

impl Environment for FakeEnv {
    type Document = FakeDocument;
    type Xhr = FakeXhr;
    type Fetch = FakeFetch;

    fn document(&self) -> Option<&Self::Document> {
        self.document.as_ref()
    }

    fn xhr(&self) -> &Self::Xhr {
        &self.xhr
    }

    fn fetch(&self) -> Option<&Self::Fetch> {
        self.fetch.as_ref()
    }
}
