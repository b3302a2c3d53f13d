use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view inside a throwaway reactive runtime.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Number of elements in `html` whose class attribute equals `class`, ignoring
/// surrounding whitespace. Dynamic class values are rendered with a leading space.
pub fn count_class(html: &str, class: &str) -> usize {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"'))
        .filter(|(value, _)| value.trim() == class)
        .count()
}

#[cfg(test)]
mod tests {
    use super::count_class;

    #[test]
    fn count_class_ignores_padding_inside_the_attribute() {
        let html = r#"<div class=" calendar-day absent">1</div><div class="calendar-day present">2</div><div class="calendar-day absent ">3</div><div class="calendar-days"></div>"#;
        assert_eq!(count_class(html, "calendar-day absent"), 2);
        assert_eq!(count_class(html, "calendar-day present"), 1);
        assert_eq!(count_class(html, "calendar-day"), 0);
    }
}
