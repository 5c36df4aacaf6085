use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    icon_sized(path, 20)
}

fn icon_sized(path: &'static str, size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_shopping_cart() -> Html {
    icon_base("M6 6h15l-1.5 9h-12zM6 6L5 3H2M9 20a1 1 0 100-2 1 1 0 000 2zM18 20a1 1 0 100-2 1 1 0 000 2z")
}
pub fn icon_package() -> Html {
    icon_base("M21 8l-9-5-9 5v8l9 5 9-5zM3 8l9 5 9-5M12 13v8")
}
pub fn icon_package_plus() -> Html {
    icon_base("M16 16h6M19 13v6M21 10V8l-9-5-9 5v8l9 5 2-1.1M3 8l9 5 9-5M12 13v8")
}
pub fn icon_truck() -> Html {
    icon_base("M1 3h15v13H1zM16 8h4l3 3v5h-7zM5.5 21a2.5 2.5 0 100-5 2.5 2.5 0 000 5zM18.5 21a2.5 2.5 0 100-5 2.5 2.5 0 000 5z")
}
pub fn icon_warehouse() -> Html {
    icon_base("M22 8.35V20a2 2 0 01-2 2H4a2 2 0 01-2-2V8.35L12 3zM6 18h12M6 14h12")
}
pub fn icon_clipboard() -> Html {
    icon_base("M9 2h6v4H9zM16 4h2a2 2 0 012 2v14a2 2 0 01-2 2H6a2 2 0 01-2-2V6a2 2 0 012-2h2M12 11h4M12 16h4M8 11h.01M8 16h.01")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_dollar() -> Html {
    icon_sized("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6", 40)
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_log_in() -> Html {
    icon_base("M15 3h4a2 2 0 012 2v14a2 2 0 01-2 2h-4M10 17l5-5-5-5M15 12H3")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6")
}
pub fn icon_save() -> Html {
    icon_base("M19 21H5a2 2 0 01-2-2V5a2 2 0 012-2h11l5 5v11a2 2 0 01-2 2zM17 21v-8H7v8M7 3v5h8")
}
pub fn icon_x() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_check_circle() -> Html {
    icon_sized("M22 11.08V12a10 10 0 11-5.93-9.14M22 4L12 14.01l-3-3", 96)
}
pub fn icon_x_circle() -> Html {
    icon_sized("M12 22a10 10 0 100-20 10 10 0 000 20zM15 9l-6 6M9 9l6 6", 96)
}
