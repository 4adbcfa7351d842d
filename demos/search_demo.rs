//! Renders a decorated search view headlessly and prints the HTML before and
//! after the fetch resolves.
//!
//! Run with `cargo run --example search_demo`.

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_data_getter::prelude::*;
use std::time::Duration;
use tokio::time::{sleep, timeout};

#[derive(Clone, PartialEq)]
struct SearchArgs {
    query: String,
    highlight: bool,
}

#[derive(Clone, PartialEq)]
struct Hits {
    titles: Vec<String>,
}

async fn search(args: SearchArgs) -> FetchResult<Hits> {
    println!("Searching for {}", args.query);
    sleep(Duration::from_millis(300)).await;
    if args.query.is_empty() {
        return Err("empty query".into());
    }
    Ok(Hits {
        titles: (1..=3).map(|n| format!("{} #{n}", args.query)).collect(),
    })
}

#[allow(non_snake_case)]
fn HitList(props: FetchedProps<SearchArgs, Hits>) -> Element {
    let refetch = props.refetch;
    let class = if props.args.highlight { "hits highlight" } else { "hits" };
    rsx! {
        button { onclick: move |_| refetch.call(), "Search again" }
        ul { class,
            for title in props.data.titles.iter() {
                li { "{title}" }
            }
        }
    }
}

#[allow(non_snake_case)]
fn Searching() -> Element {
    rsx! {
        p { class: "spinner", "Searching..." }
    }
}

fn app() -> Element {
    let hits = use_hook(|| {
        with_data_getter(search)
            .when_changes(|args: &SearchArgs| vec![args.query.clone()])
            .named("search")
            .wrap(HitList)
            .with_loading(Searching)
    });

    hits.render(SearchArgs {
        query: "dioxus".to_string(),
        highlight: true,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    println!("before: {}", dioxus_ssr::render(&dom));

    while let Ok(()) = timeout(Duration::from_secs(1), dom.wait_for_work()).await {
        dom.render_immediate(&mut NoOpMutations);
    }
    println!("after:  {}", dioxus_ssr::render(&dom));
}
