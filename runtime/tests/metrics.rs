//! Controller metrics recorded through a thread-local recorder

use tasklist_core::{DeleteItem, ItemId, ListContainer};
use tasklist_runtime::ControllerConfig;
use tasklist_runtime::metrics::{
    MOUNTS_TOTAL, RENDER_DURATION_SECONDS, RENDERS_TOTAL, SUBMITS_TOTAL,
};
use tasklist_testing::{Harness, MetricsRecorder};

#[test]
fn double_mount_and_empty_submit_are_counted_correctly() {
    let recorder = MetricsRecorder::new();

    recorder.record(|| {
        let page = Harness::mounted();
        page.controller.mount();
        page.type_and_submit("A");
        page.type_and_submit("");
    });

    assert_eq!(recorder.counter(MOUNTS_TOTAL), 1);
    assert_eq!(recorder.counter(RENDERS_TOTAL), 1);
    assert_eq!(recorder.counter(SUBMITS_TOTAL), 2);
    assert_eq!(recorder.histogram_samples(RENDER_DURATION_SECONDS), 1);
}

#[test]
fn every_render_path_is_counted() {
    let recorder = MetricsRecorder::new();

    recorder.record(|| {
        let page = Harness::new(
            ListContainer::seeded(["A", "B"]),
            ControllerConfig::default().with_render_on_mount(true),
        );
        page.controller.mount();
        page.toggle(ItemId::new(0));
        page.controller.handle_delete(DeleteItem {
            id: ItemId::new(999),
        });
        page.controller.unmount();
        page.controller.handle_add("C".into());
        page.controller.mount();
    });

    // mount render, toggle, missing delete, remount render
    assert_eq!(recorder.counter(RENDERS_TOTAL), 4);
    assert_eq!(recorder.counter(MOUNTS_TOTAL), 2);
    assert_eq!(recorder.counter(SUBMITS_TOTAL), 0);
    assert_eq!(recorder.histogram_samples(RENDER_DURATION_SECONDS), 4);
}
