use anyhow::Context;
use compose_hooks::*;

fn use_count() -> Props {
    let (count, set_count) = use_state(|| 0i64);
    let increment = {
        let set_count = set_count.clone();
        Callback::from_fn(move || set_count.update(|c| *c += 1))
    };
    let decrement = Callback::from_fn(move || set_count.update(|c| *c -= 1));
    props! { "count" => count, "increment" => increment, "decrement" => decrement }
}

fn count_presenter(props: &Props) -> View {
    let count = props.get("count").and_then(PropValue::as_int).unwrap_or_default();
    Column(vec![
        Text(format!("Current count is: {count}")),
        Button("-", props.get("decrement").and_then(PropValue::as_callback).cloned()),
        Button("+", props.get("increment").and_then(PropValue::as_callback).cloned()),
    ])
}

fn click(root: &mut Root, label: &str) -> anyhow::Result<()> {
    root.view()
        .find_button(label)
        .with_context(|| format!("no '{label}' button"))?
        .click();
    root.flush();
    println!("[{label}] {}", root.view().text());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let counter = compose(hooks! { use_count => use_count })
        .apply(Component::named("CountPresenter", count_presenter))?;
    let mut root = Root::new(counter, Props::new());
    println!("{}", root.view().text());

    click(&mut root, "+")?;
    click(&mut root, "+")?;
    click(&mut root, "-")?;

    // caller props win over hook output
    root.set_props(props! { "count" => 100 });
    root.flush();
    println!("[count=100] {}", root.view().text());

    log::info!("rendered {} times", root.render_count());
    Ok(())
}
