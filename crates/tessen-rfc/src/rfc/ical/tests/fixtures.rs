//! RFC 5545 sample documents.

/// Minimal VEVENT (RFC 5545 §3.6.1).
pub const VEVENT_MINIMAL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//xyz Corp//NONSGML PDA Calendar Version 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123401@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970903T163000Z\r\n\
DTEND:19970903T190000Z\r\n\
SUMMARY:Annual Employee Review\r\n\
CLASS:PRIVATE\r\n\
CATEGORIES:BUSINESS,HUMAN RESOURCES\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// All-day anniversary (RFC 5545 §3.6.1).
pub const VEVENT_ALL_DAY: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123403@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART;VALUE=DATE:19971102\r\n\
SUMMARY:Our Blissful Anniversary\r\n\
TRANSP:TRANSPARENT\r\n\
CLASS:CONFIDENTIAL\r\n\
CATEGORIES:ANNIVERSARY,PERSONAL,SPECIAL OCCASION\r\n\
RRULE:FREQ=YEARLY\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Event with a duration and a display alarm.
pub const VEVENT_WITH_ALARM: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:alarm-test@example.com\r\n\
DTSTAMP:20060206T001102Z\r\n\
DTSTART:20060104T140000Z\r\n\
DURATION:PT1H30M\r\n\
SUMMARY:Event with alarm\r\n\
STATUS:CONFIRMED\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
REPEAT:2\r\n\
DURATION:PT5M\r\n\
DESCRIPTION:Reminder\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Event in a named timezone, with its VTIMEZONE definition.
pub const VEVENT_WITH_TIMEZONE: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//RDU Software//NONSGML HandCal//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19981025T020000\r\n\
TZOFFSETFROM:-0400\r\n\
TZOFFSETTO:-0500\r\n\
TZNAME:EST\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:19990404T020000\r\n\
TZOFFSETFROM:-0500\r\n\
TZOFFSETTO:-0400\r\n\
TZNAME:EDT\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
DTSTAMP:19980309T231000Z\r\n\
UID:guid-1.example.com\r\n\
ORGANIZER:mailto:mrbig@example.com\r\n\
ATTENDEE;RSVP=TRUE;ROLE=REQ-PARTICIPANT;CUTYPE=GROUP:\r\n\
 mailto:employee-A@example.com\r\n\
DESCRIPTION:Project XYZ Review Meeting\r\n\
CATEGORIES:MEETING\r\n\
CLASS:PUBLIC\r\n\
CREATED:19980309T130000Z\r\n\
SUMMARY:XYZ Project Review\r\n\
DTSTART;TZID=America/New_York:19980312T083000\r\n\
DTEND;TZID=America/New_York:19980312T093000\r\n\
LOCATION:1CP Conference Room 4350\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Event with quoted, multi-valued and caret-encoded parameters.
pub const VEVENT_WITH_ATTENDEES: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:attendees@example.com\r\n\
DTSTAMP:20230101T000000Z\r\n\
DTSTART:20230615T140000Z\r\n\
ORGANIZER;CN=\"Doe, John\":mailto:john@example.com\r\n\
ATTENDEE;CN=Jane;MEMBER=\"mailto:a@example.com\",\"mailto:b@example.com\":mailto:jane@example.com\r\n\
ATTENDEE;CN=Bob ^'The Builder^':mailto:bob@example.com\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Event carrying typed values of every supported kind.
pub const VEVENT_TYPED_VALUES: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:typed@example.com\r\n\
DTSTAMP:20230101T000000Z\r\n\
DTSTART:20230615T140000Z\r\n\
SEQUENCE:3\r\n\
PRIORITY:1\r\n\
GEO:37.386013;-122.082932\r\n\
SUMMARY:Hello\\, World\r\n\
DESCRIPTION:Line one\\nLine two\\; with semicolon\r\n\
CATEGORIES:WORK,Q3\\, planning\r\n\
ATTACH;ENCODING=BASE64;VALUE=BINARY:aGVsbG8gd29ybGQ=\r\n\
X-ALLDAY;VALUE=BOOLEAN:true\r\n\
X-CUSTOM:anything goes\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// VTODO with an alarm (RFC 5545 §3.6.2).
pub const VTODO_WITH_ALARM: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VTODO\r\n\
UID:20070313T123432Z-456553@example.com\r\n\
DTSTAMP:20070313T123432Z\r\n\
DUE;VALUE=DATE:20070501\r\n\
SUMMARY:Submit Quebec Income Tax Return for 2006\r\n\
CLASS:CONFIDENTIAL\r\n\
CATEGORIES:FAMILY,FINANCE\r\n\
STATUS:NEEDS-ACTION\r\n\
BEGIN:VALARM\r\n\
ACTION:AUDIO\r\n\
TRIGGER;VALUE=DATE-TIME:20070430T080000Z\r\n\
END:VALARM\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";

/// All fixtures, named for failure messages.
pub const ALL: &[(&str, &str)] = &[
    ("VEVENT_MINIMAL", VEVENT_MINIMAL),
    ("VEVENT_ALL_DAY", VEVENT_ALL_DAY),
    ("VEVENT_WITH_ALARM", VEVENT_WITH_ALARM),
    ("VEVENT_WITH_TIMEZONE", VEVENT_WITH_TIMEZONE),
    ("VEVENT_WITH_ATTENDEES", VEVENT_WITH_ATTENDEES),
    ("VEVENT_TYPED_VALUES", VEVENT_TYPED_VALUES),
    ("VTODO_WITH_ALARM", VTODO_WITH_ALARM),
];
