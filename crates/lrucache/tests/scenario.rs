use lrucache::{CacheConfig, Error, IntLruCache, LruCache, SharedLruCache};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn capacity_two_walkthrough() {
    init_tracing();
    let mut cache = IntLruCache::new(2).unwrap();

    cache.put(1, 1);
    cache.put(2, 2);
    assert_eq!(cache.get(1), 1); // 1 becomes MRU
    cache.put(3, 3); // evicts 2
    assert_eq!(cache.get(2), -1);
    cache.put(4, 4); // evicts 1
    assert_eq!(cache.get(1), -1);
    assert_eq!(cache.get(3), 3);
    assert_eq!(cache.get(4), 4);
    assert_eq!(cache.len(), 2);
}

#[test]
fn generic_cache_follows_same_walkthrough() {
    init_tracing();
    let mut cache = LruCache::new(2).unwrap();

    assert_eq!(cache.put("one", 1), None);
    assert_eq!(cache.put("two", 2), None);
    assert_eq!(cache.get(&"one"), Some(&1));
    assert_eq!(cache.put("three", 3), Some(("two", 2)));
    assert_eq!(cache.get(&"two"), None);
    assert_eq!(cache.put("four", 4), Some(("one", 1)));
    assert_eq!(cache.get(&"one"), None);
    assert_eq!(cache.get(&"three"), Some(&3));
    assert_eq!(cache.get(&"four"), Some(&4));
}

#[test]
fn config_drives_every_cache_type() {
    let config: CacheConfig = serde_json::from_str(r#"{"capacity": 3}"#).unwrap();

    let lru = LruCache::<u8, u8>::from_config(&config).unwrap();
    let shared = SharedLruCache::<u8, u8>::from_config(&config).unwrap();
    assert_eq!(lru.capacity(), 3);
    assert_eq!(shared.capacity(), 3);

    let zero = CacheConfig { capacity: 0 };
    assert!(matches!(
        LruCache::<u8, u8>::from_config(&zero),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        SharedLruCache::<u8, u8>::from_config(&zero),
        Err(Error::InvalidArgument(_))
    ));
}
