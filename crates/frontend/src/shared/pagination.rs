//! Клиентская пагинация: число страниц, срез текущей страницы, видимые номера

/// Сколько соседних страниц показывать по обе стороны от текущей
pub const PAGE_WINDOW: usize = 2;

/// Элемент панели пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Пропуск между несмежными номерами
    Gap,
}

/// `ceil(total / page_size)`; при `page_size == 0` страниц нет
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Срез страницы `page` (нумерация с 1)
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Навигация по страницам нужна только когда страниц больше одной
pub fn has_page_controls(total_pages: usize) -> bool {
    total_pages > 1
}

/// Видимые номера страниц: первая, последняя и все в пределах ±`PAGE_WINDOW` от текущей.
/// Пустой список, если страниц не больше одной
pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut last_shown = 0;
    for page in 1..=total {
        let near_current = page + PAGE_WINDOW >= current && page <= current + PAGE_WINDOW;
        if page == 1 || page == total || near_current {
            if last_shown != 0 && page > last_shown + 1 {
                items.push(PageItem::Gap);
            }
            items.push(PageItem::Page(page));
            last_shown = page;
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<usize> = (1..=12).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 2, 10), &[11, 12]);
        assert!(page_slice(&items, 3, 10).is_empty());
    }

    #[test]
    fn test_single_page_has_no_controls() {
        assert!(visible_pages(1, 1).is_empty());
        assert!(visible_pages(1, 0).is_empty());
        assert!(!has_page_controls(total_pages(3, 10)));
        assert!(!has_page_controls(total_pages(0, 10)));
        assert!(has_page_controls(total_pages(11, 10)));
    }

    #[test]
    fn test_two_pages() {
        assert_eq!(visible_pages(1, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_window_around_current() {
        assert_eq!(
            visible_pages(6, 12),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Gap, Page(12)]
        );
    }

    #[test]
    fn test_window_at_edges() {
        assert_eq!(
            visible_pages(1, 10),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            visible_pages(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }
}
