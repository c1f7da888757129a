use crate::domain::value::{AppKey, MessageHeader, MessageText, Password, RawPhoneNumber, UserCode};

/// Default character encoding for bulk sends (Turkish alphabet).
pub const DEFAULT_ENCODING: &str = "TR";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One message/recipient pair inside a bulk send.
pub struct OutboundMessage {
    text: MessageText,
    recipient: RawPhoneNumber,
}

impl OutboundMessage {
    pub fn new(text: MessageText, recipient: RawPhoneNumber) -> Self {
        Self { text, recipient }
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn recipient(&self) -> &RawPhoneNumber {
        &self.recipient
    }
}

#[derive(Debug, Clone)]
/// Batch of messages submitted to the NetGSM bulk send API.
///
/// [`BulkSendRequest::new`] fills provider defaults: `TR` encoding and empty
/// `iysfilter`/`partnercode` fields, which NetGSM expects to be present even
/// when unused.
pub struct BulkSendRequest {
    header: MessageHeader,
    messages: Vec<OutboundMessage>,
    encoding: String,
    iys_filter: String,
    partner_code: String,
}

impl BulkSendRequest {
    pub fn new(header: MessageHeader, messages: Vec<OutboundMessage>) -> Self {
        Self {
            header,
            messages,
            encoding: DEFAULT_ENCODING.to_owned(),
            iys_filter: String::new(),
            partner_code: String::new(),
        }
    }

    /// Override the character encoding (`TR` by default).
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Set the IYS consent filter forwarded to NetGSM.
    pub fn with_iys_filter(mut self, filter: impl Into<String>) -> Self {
        self.iys_filter = filter.into();
        self
    }

    /// Set the IYS brand/partner code forwarded to NetGSM.
    pub fn with_partner_code(mut self, code: impl Into<String>) -> Self {
        self.partner_code = code.into();
        self
    }

    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    pub fn messages(&self) -> &[OutboundMessage] {
        &self.messages
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn iys_filter(&self) -> &str {
        &self.iys_filter
    }

    pub fn partner_code(&self) -> &str {
        &self.partner_code
    }
}

#[derive(Debug, Clone)]
/// Account credentials carried in the OTP request XML `<header>` block.
pub struct OtpCredentials {
    usercode: UserCode,
    password: Password,
    header: MessageHeader,
    appkey: AppKey,
}

impl OtpCredentials {
    pub fn new(
        usercode: UserCode,
        password: Password,
        header: MessageHeader,
        appkey: AppKey,
    ) -> Self {
        Self {
            usercode,
            password,
            header,
            appkey,
        }
    }

    pub fn usercode(&self) -> &UserCode {
        &self.usercode
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    pub fn appkey(&self) -> &AppKey {
        &self.appkey
    }
}
