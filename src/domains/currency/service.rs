//! Currency service: rate lifecycle, selection, conversion and formatting.
//!
//! One service is built per process (per page, on the site) and shared by
//! `Arc`. `init` moves it from `Uninitialized` through `Initializing` to
//! `Ready`; listeners follow along through [`CurrencyService::subscribe`].

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{Mutex, broadcast};
use tracing::{error, info, warn};

use super::error::CurrencyError;
use super::format::format_currency;
use super::source::{OpenErApiSource, RateSource, Rates};
use super::storage::{FileStore, KeyValueStore, PREFERENCE_KEY, RATES_KEY, RATES_TIMESTAMP_KEY};
use crate::core::config::{Config, CurrencyConfig};

/// Currency used when no preference has been stored.
pub const BASE_CURRENCY: &str = "USD";

/// Approximate rates installed when no fetched or cached table is available.
pub const FALLBACK_RATES: [(&str, f64); 6] = [
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("NOK", 10.5),
    ("CAD", 1.35),
    ("AUD", 1.52),
];

const EVENT_CAPACITY: usize = 16;
const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Service lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Uninitialized,
    Initializing,
    Ready,
}

/// Where the current rate table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateOrigin {
    /// Only the base currency is known.
    Default,
    /// A persisted table inside the freshness window.
    Cache,
    /// A persisted table past the freshness window, used because fetching failed.
    StaleCache,
    /// Freshly fetched.
    Remote,
    /// The embedded approximate table.
    Fallback,
}

/// Typed change notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyEvent {
    /// `init` finished; rates are usable.
    Ready { origin: RateOrigin },
    /// The selected currency changed.
    Changed { currency: String },
}

#[derive(Debug)]
struct State {
    selected: String,
    rates: Rates,
    lifecycle: Lifecycle,
    origin: RateOrigin,
}

/// A persisted rate table read back from the store.
struct CachedRates {
    rates: Rates,
    fresh: bool,
}

pub struct CurrencyService {
    source: Arc<dyn RateSource>,
    store: Arc<dyn KeyValueStore>,
    locale: String,
    ttl_millis: i64,
    state: RwLock<State>,
    init_lock: Mutex<()>,
    events: broadcast::Sender<CurrencyEvent>,
}

impl CurrencyService {
    /// Build a service over explicit collaborators. The stored preference,
    /// if any, becomes the selected currency.
    pub fn new(
        source: Arc<dyn RateSource>,
        store: Arc<dyn KeyValueStore>,
        config: &CurrencyConfig,
    ) -> Self {
        let selected = store
            .get(PREFERENCE_KEY)
            .unwrap_or_else(|| BASE_CURRENCY.to_string());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            source,
            store,
            locale: config.locale.clone(),
            ttl_millis: i64::from(config.cache_ttl_hours) * MILLIS_PER_HOUR,
            state: RwLock::new(State {
                selected,
                rates: Rates::from([(BASE_CURRENCY.to_string(), 1.0)]),
                lifecycle: Lifecycle::Uninitialized,
                origin: RateOrigin::Default,
            }),
            init_lock: Mutex::new(()),
            events,
        }
    }

    /// Build the service the CLI uses: open.er-api.com and a JSON file store.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let source = OpenErApiSource::new(&config.currency.rates_url)?;
        let store = FileStore::open(config.currency_store_path());
        Ok(Self::new(Arc::new(source), Arc::new(store), &config.currency))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.read().lifecycle
    }

    pub fn origin(&self) -> RateOrigin {
        self.read().origin
    }

    pub fn rates(&self) -> Rates {
        self.read().rates.clone()
    }

    /// Receive every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CurrencyEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: CurrencyEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Load rates, from the cache when fresh, otherwise from the source.
    ///
    /// A no-op once `Ready`. Concurrent callers wait on the first one, so at
    /// most one fetch is in flight.
    pub async fn init(&self) -> RateOrigin {
        let _guard = self.init_lock.lock().await;
        if self.lifecycle() == Lifecycle::Ready {
            return self.origin();
        }
        self.write().lifecycle = Lifecycle::Initializing;

        let cached = self.cached_rates();
        let origin = match cached {
            Some(CachedRates { rates, fresh: true }) => {
                self.install(rates, RateOrigin::Cache);
                RateOrigin::Cache
            }
            stale => self.fetch_rates(stale.map(|c| c.rates)).await,
        };

        info!(?origin, "Currency rates ready");
        self.publish(CurrencyEvent::Ready { origin });
        origin
    }

    /// Fetch from the source and persist; on failure degrade to `stale`
    /// rates or the embedded table and go back to `Uninitialized`.
    async fn fetch_rates(&self, stale: Option<Rates>) -> RateOrigin {
        match self.source.fetch_rates().await {
            Ok(rates) => {
                self.persist_rates(&rates);
                self.install(rates, RateOrigin::Remote);
                RateOrigin::Remote
            }
            Err(e) => {
                error!("Currency error: {}", e);
                let mut state = self.write();
                if let Some(rates) = stale {
                    state.rates = rates;
                    state.origin = RateOrigin::StaleCache;
                } else if state.rates.len() <= 1 {
                    state.rates = fallback_rates();
                    state.origin = RateOrigin::Fallback;
                }
                state.lifecycle = Lifecycle::Uninitialized;
                state.origin
            }
        }
    }

    fn install(&self, rates: Rates, origin: RateOrigin) {
        let mut state = self.write();
        state.rates = rates;
        state.origin = origin;
        state.lifecycle = Lifecycle::Ready;
    }

    fn cached_rates(&self) -> Option<CachedRates> {
        let raw = self.store.get(RATES_KEY)?;
        let timestamp: i64 = self.store.get(RATES_TIMESTAMP_KEY)?.parse().ok()?;
        let rates: Rates = match serde_json::from_str(&raw) {
            Ok(rates) => rates,
            Err(e) => {
                warn!("Ignoring unreadable cached rates: {}", e);
                return None;
            }
        };
        let age = Utc::now().timestamp_millis() - timestamp;
        Some(CachedRates {
            rates,
            fresh: age < self.ttl_millis,
        })
    }

    fn persist_rates(&self, rates: &Rates) {
        let result = serde_json::to_string(rates)
            .map_err(|e| CurrencyError::storage(e.to_string()))
            .and_then(|json| self.store.set(RATES_KEY, &json))
            .and_then(|()| {
                self.store
                    .set(RATES_TIMESTAMP_KEY, &Utc::now().timestamp_millis().to_string())
            });
        if let Err(e) = result {
            warn!("Could not persist currency rates: {}", e);
        }
    }

    /// The selected currency code.
    pub fn get(&self) -> String {
        self.read().selected.clone()
    }

    /// Select a currency, persist the preference and notify subscribers.
    ///
    /// A blank code is ignored.
    pub fn set(&self, code: &str) {
        let code = code.trim().to_ascii_uppercase();
        if code.is_empty() {
            warn!("Ignoring blank currency code");
            return;
        }
        self.write().selected = code.clone();
        if let Err(e) = self.store.set(PREFERENCE_KEY, &code) {
            warn!("Could not persist currency preference: {}", e);
        }
        self.publish(CurrencyEvent::Changed { currency: code });
    }

    /// Units of `code` (default: selected) per USD; 1 when unknown.
    pub fn rate(&self, code: Option<&str>) -> f64 {
        let state = self.read();
        let code = code.unwrap_or(&state.selected);
        state
            .rates
            .get(code)
            .copied()
            .filter(|rate| rate.is_finite() && *rate != 0.0)
            .unwrap_or(1.0)
    }

    pub fn convert_from_usd(&self, amount: f64, code: Option<&str>) -> f64 {
        amount * self.rate(code)
    }

    pub fn convert_to_usd(&self, amount: f64, code: Option<&str>) -> f64 {
        amount / self.rate(code)
    }

    /// Format `amount` in `code` (default: selected) for the configured locale.
    pub fn format(&self, amount: f64, code: Option<&str>) -> String {
        let code = code.map(str::to_string).unwrap_or_else(|| self.get());
        format_currency(amount, &code, &self.locale)
    }
}

fn fallback_rates() -> Rates {
    FALLBACK_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::currency::storage::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSource {
        calls: AtomicUsize,
        rates: Option<Rates>,
        delay: Duration,
    }

    impl CountingSource {
        fn with(rates: Option<Rates>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                rates,
                delay,
            })
        }

        fn table() -> Rates {
            Rates::from([
                ("USD".to_string(), 1.0),
                ("EUR".to_string(), 0.9),
                ("NOK".to_string(), 11.0),
            ])
        }

        fn ok() -> Arc<Self> {
            Self::with(Some(Self::table()), Duration::ZERO)
        }

        fn failing() -> Arc<Self> {
            Self::with(None, Duration::ZERO)
        }

        fn slow() -> Arc<Self> {
            Self::with(Some(Self::table()), Duration::from_millis(20))
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl RateSource for CountingSource {
        async fn fetch_rates(&self) -> Result<Rates, CurrencyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.rates
                .clone()
                .ok_or_else(|| CurrencyError::source_failure("offline"))
        }
    }

    fn service(source: Arc<CountingSource>, store: Arc<MemoryStore>) -> CurrencyService {
        CurrencyService::new(source, store, &CurrencyConfig::default())
    }

    #[tokio::test]
    async fn test_fetch_persists_and_second_init_is_noop() {
        let source = CountingSource::ok();
        let store = Arc::new(MemoryStore::new());
        let svc = service(source.clone(), store.clone());

        assert_eq!(svc.lifecycle(), Lifecycle::Uninitialized);
        assert_eq!(svc.init().await, RateOrigin::Remote);
        assert_eq!(svc.lifecycle(), Lifecycle::Ready);
        assert!(store.get(RATES_KEY).is_some());
        assert!(store.get(RATES_TIMESTAMP_KEY).is_some());

        svc.init().await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_fetch_on_next_load() {
        let store = Arc::new(MemoryStore::new());
        service(CountingSource::ok(), store.clone()).init().await;

        let source = CountingSource::ok();
        let next_load = service(source.clone(), store);
        assert_eq!(next_load.init().await, RateOrigin::Cache);
        assert_eq!(source.calls(), 0);
        assert_eq!(next_load.rate(Some("NOK")), 11.0);
    }

    #[tokio::test]
    async fn test_stale_cache_refetches() {
        let store = Arc::new(MemoryStore::new());
        store.set(RATES_KEY, r#"{"USD":1,"EUR":0.5}"#).unwrap();
        let old = Utc::now().timestamp_millis() - 25 * MILLIS_PER_HOUR;
        store.set(RATES_TIMESTAMP_KEY, &old.to_string()).unwrap();

        let source = CountingSource::ok();
        let svc = service(source.clone(), store);
        assert_eq!(svc.init().await, RateOrigin::Remote);
        assert_eq!(source.calls(), 1);
        assert_eq!(svc.rate(Some("EUR")), 0.9);
    }

    #[tokio::test]
    async fn test_failure_uses_stale_cache() {
        let store = Arc::new(MemoryStore::new());
        store.set(RATES_KEY, r#"{"USD":1,"EUR":0.5}"#).unwrap();
        let old = Utc::now().timestamp_millis() - 48 * MILLIS_PER_HOUR;
        store.set(RATES_TIMESTAMP_KEY, &old.to_string()).unwrap();

        let svc = service(CountingSource::failing(), store);
        assert_eq!(svc.init().await, RateOrigin::StaleCache);
        assert_eq!(svc.rate(Some("EUR")), 0.5);
    }

    #[tokio::test]
    async fn test_failure_without_cache_falls_back_and_retries() {
        let source = CountingSource::failing();
        let svc = service(source.clone(), Arc::new(MemoryStore::new()));
        let mut events = svc.subscribe();

        assert_eq!(svc.init().await, RateOrigin::Fallback);
        assert_eq!(svc.lifecycle(), Lifecycle::Uninitialized);
        assert_eq!(svc.rate(Some("GBP")), 0.79);
        assert_eq!(
            events.recv().await.unwrap(),
            CurrencyEvent::Ready {
                origin: RateOrigin::Fallback
            }
        );

        svc.init().await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_init_fetches_once() {
        let source = CountingSource::slow();
        let svc = service(source.clone(), Arc::new(MemoryStore::new()));

        let (a, b) = futures::join!(svc.init(), svc.init());
        assert_eq!(a, RateOrigin::Remote);
        assert_eq!(b, RateOrigin::Remote);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_set_persists_and_notifies() {
        let store = Arc::new(MemoryStore::new());
        let svc = service(CountingSource::ok(), store.clone());
        let mut events = svc.subscribe();

        svc.set("eur");
        assert_eq!(svc.get(), "EUR");
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("EUR"));
        assert_eq!(
            events.recv().await.unwrap(),
            CurrencyEvent::Changed {
                currency: "EUR".to_string()
            }
        );

        // preference survives into the next load
        assert_eq!(service(CountingSource::ok(), store).get(), "EUR");
    }

    #[test]
    fn test_set_ignores_blank_code() {
        let store = Arc::new(MemoryStore::new());
        let svc = service(CountingSource::ok(), store.clone());
        svc.set("NOK");
        let mut events = svc.subscribe();

        svc.set("");
        svc.set("   ");
        assert_eq!(svc.get(), "NOK");
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("NOK"));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_conversion() {
        let svc = service(CountingSource::ok(), Arc::new(MemoryStore::new()));
        tokio_test::block_on(svc.init());

        assert_eq!(svc.convert_from_usd(100.0, Some("NOK")), 1100.0);
        assert_eq!(svc.convert_to_usd(1100.0, Some("NOK")), 100.0);
        // unknown code converts at 1
        assert_eq!(svc.convert_from_usd(100.0, Some("XYZ")), 100.0);

        svc.set("EUR");
        assert_eq!(svc.convert_from_usd(100.0, None), 90.0);
        assert_eq!(svc.format(1234.4, None), "€1,234");
        assert_eq!(svc.format(1234.4, Some("USD")), "$1,234");
    }
}
