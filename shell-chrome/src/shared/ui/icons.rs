pub(crate) const NAVBAR_MENU: &[u8] =
    include_bytes!("../../../assets/svg/menu.svg");
pub(crate) const WINDOW_MINIMIZE: &[u8] =
    include_bytes!("../../../assets/svg/window_minimize.svg");
pub(crate) const WINDOW_MAXIMIZE: &[u8] =
    include_bytes!("../../../assets/svg/window_maximize.svg");
pub(crate) const WINDOW_RESTORE: &[u8] =
    include_bytes!("../../../assets/svg/window_restore.svg");
pub(crate) const WINDOW_CLOSE: &[u8] =
    include_bytes!("../../../assets/svg/window_close.svg");
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../../../assets/logo/logo-small.png");
