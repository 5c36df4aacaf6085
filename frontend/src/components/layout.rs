use yew::prelude::*;

use super::icons::*;
use crate::hooks::{use_logout, use_session};
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-slate-100 dark:bg-slate-900">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let session = use_session();

    html! {
        <header class="bg-white dark:bg-slate-800 border-b border-slate-200 dark:border-slate-700 h-16 flex items-center justify-between px-6">
            <span class="text-indigo-600 dark:text-indigo-400 text-xl font-black tracking-tight md:hidden">{"Projeto Marco"}</span>
            <div class="flex-1"></div>
            <span class="text-sm font-semibold text-slate-600 dark:text-slate-300">
                { format!("Olá, {}!", session.first_name()) }
            </span>
        </header>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 9] = [
    NavItem {
        label: "Dashboard",
        page: Page::Dashboard,
        icon: icon_layout_grid,
    },
    NavItem {
        label: "Nova Venda",
        page: Page::NewSale,
        icon: icon_shopping_cart,
    },
    NavItem {
        label: "Novo Produto",
        page: Page::NewProduct,
        icon: icon_package,
    },
    NavItem {
        label: "Nova Viagem",
        page: Page::NewTrip,
        icon: icon_truck,
    },
    NavItem {
        label: "Estoque Atual",
        page: Page::Stock,
        icon: icon_warehouse,
    },
    NavItem {
        label: "Entrada de Produtos",
        page: Page::StockEntry,
        icon: icon_package_plus,
    },
    NavItem {
        label: "Relatório de Inventário",
        page: Page::InventoryReport,
        icon: icon_clipboard,
    },
    NavItem {
        label: "Relatório de Vendas",
        page: Page::SalesReport,
        icon: icon_bar_chart,
    },
    NavItem {
        label: "Relatório de Viagens",
        page: Page::TripsReport,
        icon: icon_trending_up,
    },
];

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let on_logout = {
        let logout = use_logout();
        Callback::from(move |_| logout.emit(()))
    };

    html! {
        <div class="w-[240px] h-screen bg-slate-200 dark:bg-slate-800 p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-indigo-600 rounded-full flex items-center justify-center text-white">
                    { icon_truck() }
                </div>
                <span class="text-indigo-700 dark:text-indigo-300 text-2xl font-black tracking-tight">{"Projeto Marco"}</span>
            </div>

            <div class="flex-1 bg-indigo-900 rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for NAV_ITEMS.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-indigo-200 text-indigo-900 w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Sair"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-6xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-slate-200 dark:border-slate-700">
                <h1 class="text-3xl font-bold text-indigo-700 dark:text-indigo-300">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}
