//! mockall doubles for the pk-core ports.

use async_trait::async_trait;
use mockall::mock;
use pk_core::ports::{
    ClipboardError, KeyValueStorePort, NotifierPort, StorageError, SystemClipboardPort,
};
use pk_core::Notice;

mock! {
    pub Store {}

    impl KeyValueStorePort for Store {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
        fn remove(&self, key: &str) -> Result<(), StorageError>;
    }
}

mock! {
    pub Clipboard {}

    #[async_trait]
    impl SystemClipboardPort for Clipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
    }
}

mock! {
    pub Notifier {}

    impl NotifierPort for Notifier {
        fn notify(&self, notice: &Notice);
    }
}
