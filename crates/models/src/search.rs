//! Keyword filters and paging bounds shared by the entity `search` functions.

use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::ColumnTrait;

const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` metacharacters so the keyword matches literally.
pub fn escape_like(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}

/// `col LIKE '%kw%' ESCAPE '\'`: case-sensitive literal substring match.
pub fn contains_literal<C: ColumnTrait>(col: C, keyword: &str) -> SimpleExpr {
    Expr::col((col.entity_name(), col))
        .like(LikeExpr::new(format!("%{}%", escape_like(keyword))).escape(LIKE_ESCAPE))
}

/// Row offset of `page`, or `None` when it cannot be expressed as a Postgres `OFFSET`.
pub fn page_offset(page: u64, size: u64) -> Option<u64> {
    if size == 0 {
        return None;
    }
    page.checked_mul(size).filter(|offset| *offset <= i64::MAX as u64)
}
