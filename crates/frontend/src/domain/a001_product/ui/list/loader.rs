use contracts::domain::a001_product::aggregate::Product;

use crate::domain::a001_product::api::CatalogApi;
use crate::shared::api_utils::RequestSequence;
use crate::shared::error::CatalogError;

/// Чем закончилась загрузка списка
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// Данные применены, число товаров
    Applied(usize),
    /// Пока запрос шёл, стартовал более новый; ответ выброшен
    Stale,
    Failed(CatalogError),
}

/// Полная перезагрузка каталога
///
/// Ошибки только логируются: таблица остаётся как была (при первой загрузке - пустой).
pub async fn load_products<A>(
    api: &A,
    sequence: &RequestSequence,
    apply: impl FnOnce(Vec<Product>),
) -> LoadOutcome
where
    A: CatalogApi + ?Sized,
{
    let ticket = sequence.begin();
    let result = api.list_all().await;

    if !sequence.is_latest(ticket) {
        log::debug!("dropping stale product list response #{}", ticket);
        return LoadOutcome::Stale;
    }

    match result {
        Ok(products) => {
            let count = products.len();
            log::info!("loaded {} products", count);
            apply(products);
            LoadOutcome::Applied(count)
        }
        Err(e) => {
            log::error!("API Error: {}", e);
            LoadOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::mock::{MockCatalogApi, RacingApi};
    use crate::domain::a001_product::ui::list::state::tests::product;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_applies_loaded_products() {
        let api = MockCatalogApi::with_products(vec![product(1, "Hat", 5.0)]);
        let seq = RequestSequence::new();
        let applied = RefCell::new(Vec::new());

        let outcome = block_on(load_products(&api, &seq, |p| *applied.borrow_mut() = p));

        assert_eq!(outcome, LoadOutcome::Applied(1));
        assert_eq!(applied.borrow().len(), 1);
    }

    #[test]
    fn test_failure_does_not_apply() {
        let api = MockCatalogApi::failing(CatalogError::Decode("bad json".into()));
        let seq = RequestSequence::new();
        let mut called = false;

        let outcome = block_on(load_products(&api, &seq, |_| called = true));

        assert!(matches!(outcome, LoadOutcome::Failed(CatalogError::Decode(_))));
        assert!(!called);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let seq = RequestSequence::new();
        let api = RacingApi::new(
            MockCatalogApi::with_products(vec![product(1, "Hat", 5.0)]),
            &seq,
        );
        let mut called = false;

        let outcome = block_on(load_products(&api, &seq, |_| called = true));

        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(!called);
    }
}
