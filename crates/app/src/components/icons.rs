use access::NavIcon;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdCalendar, LdClock, LdFileText, LdFolder, LdLayoutDashboard, LdScale,
    LdSearch, LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;

/// Lucide rendering of a navigation icon hint.
#[component]
pub fn NavIconView(icon: NavIcon, #[props(default = 18)] size: u32) -> Element {
    match icon {
        NavIcon::None => rsx! {},
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        NavIcon::Clients => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: size, height: size } },
        NavIcon::Employees => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: size, height: size } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        NavIcon::Properties => rsx! { Icon::<LdFolder> { icon: LdFolder, width: size, height: size } },
        NavIcon::Finance => rsx! { Icon::<LdScale> { icon: LdScale, width: size, height: size } },
        NavIcon::Crm => rsx! { Icon::<LdBell> { icon: LdBell, width: size, height: size } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        NavIcon::Document => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        NavIcon::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        NavIcon::Search => rsx! { Icon::<LdSearch> { icon: LdSearch, width: size, height: size } },
        NavIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
    }
}
