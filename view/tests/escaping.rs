//! Markup injection tests across the rendered list

#![allow(clippy::unwrap_used)] // Tests can unwrap

use proptest::prelude::*;
use tasklist_core::{ItemId, ListContainer, UpdateItem};
use tasklist_view::{ItemCallbacks, list_view};

fn render(titles: &[&str], completed: &[u64]) -> String {
    let container = ListContainer::seeded(titles.iter().copied());
    for id in completed {
        container.update_item(UpdateItem {
            id: ItemId::new(*id),
            completed: true,
        });
    }
    list_view(&container.items(), &ItemCallbacks::new(|_| {}, |_| {})).to_html()
}

#[test]
fn script_title_is_rendered_inert() {
    let html = render(&["<script>alert(1)</script>"], &[]);

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn struck_through_title_is_still_escaped() {
    let html = render(&[r#"Tom & "Jerry's""#], &[0]);

    assert!(html.contains("<s>Tom &amp; &quot;Jerry&#39;s&quot;</s>"));
}

proptest! {
    #[test]
    fn no_title_can_open_a_tag(title in r#"[a-z<>&"' /=]{0,24}"#, done in any::<bool>()) {
        let completed: &[u64] = if done { &[0] } else { &[] };
        let html = render(&[title.as_str()], completed);

        // Escaped titles add no `<`, so only the fixed markup is counted.
        let opened = html.matches('<').count();
        let expected = if title.is_empty() { 2 } else if done { 11 } else { 9 };
        prop_assert_eq!(opened, expected);
        prop_assert!(!html.contains('\''));
    }
}
