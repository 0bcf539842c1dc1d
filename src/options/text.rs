use crate::macros::js_enum;

js_enum! {
    /// Alignment of titles along their axis or box.
    pub enum TitleAlign {
        Start => "start",
        Center => "center",
        End => "end",
    }
}

js_enum! {
    pub enum TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

js_enum! {
    pub enum TextDirection {
        Ltr => "ltr",
        Rtl => "rtl",
    }
}
