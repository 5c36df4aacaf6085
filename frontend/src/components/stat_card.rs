use rust_decimal::Decimal;
use yew::prelude::*;

use crate::format::format_currency;

#[derive(Clone, Copy, PartialEq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

impl Tone {
    pub fn for_amount(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            Tone::Negative
        } else {
            Tone::Positive
        }
    }

    fn value_class(self) -> &'static str {
        match self {
            Tone::Neutral => "text-indigo-700 dark:text-indigo-300",
            Tone::Positive => "text-green-700 dark:text-green-400",
            Tone::Negative => "text-red-700 dark:text-red-400",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: Decimal,
    #[prop_or(Tone::Neutral)]
    pub tone: Tone,
    pub icon: Html,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-slate-800 p-6 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700 flex justify-between items-start">
            <div>
                <p class="text-slate-500 dark:text-slate-400 text-[11px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class={classes!("text-2xl", "font-bold", "tracking-tight", props.tone.value_class())}>{ format_currency(props.amount) }</h3>
            </div>
            <div class="p-3 bg-indigo-50 dark:bg-slate-700 rounded-xl text-indigo-600 dark:text-indigo-300">
                { props.icon.clone() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tone_follows_sign() {
        assert!(Tone::for_amount(dec!(-0.01)) == Tone::Negative);
        assert!(Tone::for_amount(dec!(0)) == Tone::Positive);
        assert!(Tone::for_amount(dec!(10)) == Tone::Positive);
    }
}
