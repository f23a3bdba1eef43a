//! 分页器：页数计算、当前页修正、页码窗口迭代以及分页链接生成

use actix_web::HttpRequest;
use std::iter::FusedIterator;
use url::form_urlencoded;

pub const DEFAULT_PER_PAGE: u64 = 20;

const PAGE_PARAM: &str = "page";

/// 单次请求内使用的分页器
///
/// 只保存总数、每页数量以及请求的 base url 和查询参数快照，
/// 其余属性 (当前页、总页数、偏移量等) 都在访问时计算。
#[derive(Debug, Clone)]
pub struct Pager {
    total_count: Option<u64>,
    per_page: u64,
    base_url: String,
    query: Vec<(String, String)>,
}

fn parse_page(value: &str) -> Option<u64> {
    let value = value.trim();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

impl Pager {
    pub fn new(
        total_count: Option<u64>,
        per_page: u64,
        base_url: impl Into<String>,
        query: Vec<(String, String)>,
    ) -> Self {
        Self {
            total_count,
            per_page: per_page.max(1),
            base_url: base_url.into(),
            query,
        }
    }

    /// 从原始查询字符串 (不含 `?`) 构造
    pub fn from_query_string(
        total_count: Option<u64>,
        per_page: u64,
        base_url: impl Into<String>,
        query_string: &str,
    ) -> Self {
        let query = form_urlencoded::parse(query_string.as_bytes())
            .into_owned()
            .collect();
        Self::new(total_count, per_page, base_url, query)
    }

    /// 从当前请求构造，base url 为 scheme + host + path
    pub fn from_request(req: &HttpRequest, total_count: Option<u64>, per_page: u64) -> Self {
        let base_url = {
            let info = req.connection_info();
            format!("{}://{}{}", info.scheme(), info.host(), req.path())
        };
        Self::from_query_string(total_count, per_page, base_url, req.query_string())
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 请求中的 `page` 参数，缺失或无法解析时为 1
    ///
    /// 负数按 0 处理，超出 `u64` 的纯数字取 `u64::MAX`。
    fn requested_page(&self) -> u64 {
        self.query
            .iter()
            .find(|(key, _)| key == PAGE_PARAM)
            .and_then(|(_, value)| parse_page(value))
            .unwrap_or(1)
    }

    /// 获取当前页码
    ///
    /// 小于 1 时取 1；总数已知时不超过 `max(pages, 1)`；总数未知时不做上限修正。
    pub fn current_page(&self) -> u64 {
        let requested = self.requested_page().max(1);
        match self.total_count {
            None => requested,
            Some(_) => requested.min(self.pages().max(1)),
        }
    }

    /// 总页数，总数未知时为 1
    pub fn pages(&self) -> u64 {
        match self.total_count {
            None => 1,
            Some(total) => total.div_ceil(self.per_page),
        }
    }

    pub fn offset(&self) -> u64 {
        match self.current_page() {
            1 => 0,
            page => self.per_page.saturating_mul(page - 1),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }

    pub fn prev_page(&self) -> Option<u64> {
        Some(self.current_page() - 1).filter(|&page| page >= 1)
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.pages()
    }

    pub fn next_page(&self) -> Option<u64> {
        self.current_page()
            .checked_add(1)
            .filter(|&page| page <= self.pages())
    }

    /// 对应页码的 url
    ///
    /// 第 1 页不带 `page` 参数；其余参数原样保留 (包括重复的 key)，按 key 稳定排序。
    pub fn url_for(&self, page: u64) -> String {
        let page_value = page.to_string();
        let mut params: Vec<(&str, &str)> = self
            .query
            .iter()
            .filter(|(key, _)| key != PAGE_PARAM)
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        if page > 1 {
            params.push((PAGE_PARAM, page_value.as_str()));
        }
        if params.is_empty() {
            return self.base_url.clone();
        }
        params.sort_by(|a, b| a.0.cmp(b.0));

        let suffix = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        format!("{}?{}", self.base_url, suffix)
    }

    /// 使用默认窗口 (1, 2, 3, 1) 迭代页码
    pub fn iter_pages(&self) -> PageIter {
        self.iter_pages_with(PageWindow::default())
    }

    pub fn iter_pages_with(&self, window: PageWindow) -> PageIter {
        PageIter::new(self.pages(), self.current_page(), window)
    }

    /// 模板渲染用的页码链接 (数量受窗口大小限制)
    pub fn links(&self) -> Vec<PageLink> {
        let current = self.current_page();
        self.iter_pages()
            .map(|item| match item {
                Some(number) => PageLink {
                    number,
                    url: self.url_for(number),
                    current: number == current,
                    gap: false,
                },
                None => PageLink::gap(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: u64,
    pub url: String,
    pub current: bool,
    pub gap: bool,
}

impl PageLink {
    fn gap() -> Self {
        Self {
            number: 0,
            url: String::new(),
            current: false,
            gap: true,
        }
    }
}

/// 页码窗口：首尾各保留多少页，以及当前页左右各保留多少页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub left_edge: u64,
    pub left_current: u64,
    pub right_current: u64,
    pub right_edge: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            left_edge: 1,
            left_current: 2,
            right_current: 3,
            right_edge: 1,
        }
    }
}

/// 页码迭代器，`None` 表示被省略的一段页码
///
/// 每次直接跳到下一个需要展示的页码，不会逐页扫描。
#[derive(Debug, Clone)]
pub struct PageIter {
    pages: u64,
    left_edge: u64,
    // 当前页附近的窗口 [start, end)
    middle_start: u64,
    middle_end: u64,
    right_start: u64,
    cursor: Option<u64>,
    last: Option<u64>,
    pending: Option<u64>,
}

impl PageIter {
    fn new(pages: u64, current_page: u64, window: PageWindow) -> Self {
        Self {
            pages,
            left_edge: window.left_edge,
            middle_start: current_page.saturating_sub(window.left_current),
            middle_end: current_page.saturating_add(window.right_current),
            right_start: pages.saturating_sub(window.right_edge).saturating_add(1),
            cursor: Some(1),
            last: None,
            pending: None,
        }
    }

    /// 大于等于 `from` 的第一个需要展示的页码 (可能超出总页数)
    fn next_included(&self, from: u64) -> u64 {
        if from <= self.left_edge {
            return from;
        }
        let right = self.right_start.max(from);
        if self.middle_start < self.middle_end && from < self.middle_end {
            right.min(self.middle_start.max(from))
        } else {
            right
        }
    }
}

impl Iterator for PageIter {
    type Item = Option<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(num) = self.pending.take() {
            return Some(Some(num));
        }

        let num = self.next_included(self.cursor?);
        if num > self.pages {
            self.cursor = None;
            return None;
        }
        self.cursor = num.checked_add(1);

        let gap = matches!(self.last, Some(last) if last + 1 != num);
        self.last = Some(num);
        if gap {
            self.pending = Some(num);
            Some(None)
        } else {
            Some(Some(num))
        }
    }
}

impl FusedIterator for PageIter {}
